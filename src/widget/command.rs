//! Typed widget commands
//!
//! Every UI event becomes a [`Command`]. [`update`] is a pure function from
//! the current drag state and a command to the next drag state plus the
//! [`ViewerCall`] to issue, so the only stateful computation (rotation
//! composition) can be tested without a window or a GPU.

use cgmath::{Quaternion, Vector2};

use crate::surface::color_map::ColorMapName;
use crate::surface::view::View;
use crate::surface::viewer::Viewer;
use crate::widget::pointer::{rotation_increment, DragState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    PointerDown,
    PointerUp,
    /// Pointer position in surface-local logical pixels.
    PointerMove { x: f32, y: f32 },
    /// A drag of `(dx, dy)` pixels regardless of pointer state.
    Drag { dx: f32, dy: f32 },
    SelectView(View),
    SelectColorMap(ColorMapName),
    /// Raw threshold slider value.
    SetThreshold(f32),
    /// Raw contrast slider value in `0..=100`.
    SetContrast(f32),
    /// Drawing surface size in physical pixels.
    Resize { width: u32, height: u32 },
}

/// A side effect on the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCall {
    Rotate(Quaternion<f32>),
    SetView(View),
    SetColorMap(ColorMapName),
    SetThreshold { lo: f32, hi: f32 },
    SetContrast(f32),
    SetSize { width: u32, height: u32 },
}

impl ViewerCall {
    pub fn apply<V: Viewer + ?Sized>(self, viewer: &mut V) {
        match self {
            ViewerCall::Rotate(increment) => viewer.rotate(increment),
            ViewerCall::SetView(view) => viewer.set_view(view),
            ViewerCall::SetColorMap(name) => viewer.set_color_map(name.color_map()),
            ViewerCall::SetThreshold { lo, hi } => viewer.set_threshold(lo, hi),
            ViewerCall::SetContrast(fraction) => viewer.set_contrast(fraction),
            ViewerCall::SetSize { width, height } => viewer.set_size(width, height),
        }
    }
}

pub fn update(drag: DragState, command: Command) -> (DragState, Option<ViewerCall>) {
    match command {
        Command::PointerDown => {
            log::debug!("Pointer down at ({}, {})", drag.previous.x, drag.previous.y);
            (drag.pointer_down(), None)
        }
        Command::PointerUp => {
            log::debug!("Pointer up");
            (drag.pointer_up(), None)
        }
        Command::PointerMove { x, y } => {
            let (drag, delta) = drag.pointer_move(x, y);
            (drag, delta.map(|d| ViewerCall::Rotate(rotation_increment(d))))
        }
        Command::Drag { dx, dy } => (
            drag,
            Some(ViewerCall::Rotate(rotation_increment(Vector2::new(dx, dy)))),
        ),
        Command::SelectView(view) => (drag, Some(ViewerCall::SetView(view))),
        Command::SelectColorMap(name) => {
            log::debug!("New color map is {}", name);
            (drag, Some(ViewerCall::SetColorMap(name)))
        }
        Command::SetThreshold(value) => {
            let t = value.abs();
            (drag, Some(ViewerCall::SetThreshold { lo: -t, hi: t }))
        }
        Command::SetContrast(value) => {
            let fraction = value / 100.0;
            log::debug!("Contrast fraction {}", fraction);
            (drag, Some(ViewerCall::SetContrast(fraction)))
        }
        Command::Resize { width, height } => (drag, Some(ViewerCall::SetSize { width, height })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, InnerSpace, Rad, Rotation3};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_threshold_is_symmetric() {
        for value in [0.0, 0.25, 3.5, -2.0, 1e6] {
            let (_, call) = update(DragState::default(), Command::SetThreshold(value));
            let t = value.abs();
            assert_eq!(call, Some(ViewerCall::SetThreshold { lo: -t, hi: t }));
        }
    }

    #[test]
    fn test_threshold_zero_has_negative_zero_low_end() {
        let (_, call) = update(DragState::default(), Command::SetThreshold(0.0));
        match call {
            Some(ViewerCall::SetThreshold { lo, hi }) => {
                assert_eq!(lo, 0.0);
                assert_eq!(hi, 0.0);
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[test]
    fn test_contrast_is_normalised() {
        for value in [0.0f32, 1.0, 37.0, 50.0, 100.0] {
            let (_, call) = update(DragState::default(), Command::SetContrast(value));
            assert_eq!(call, Some(ViewerCall::SetContrast(value / 100.0)));
        }
    }

    #[test]
    fn test_resize_passes_through() {
        let (_, call) = update(
            DragState::default(),
            Command::Resize {
                width: 1023,
                height: 77,
            },
        );
        assert_eq!(
            call,
            Some(ViewerCall::SetSize {
                width: 1023,
                height: 77
            })
        );
    }

    #[test]
    fn test_selects_pass_through() {
        let drag = DragState::default();
        assert_eq!(
            update(drag, Command::SelectView(View::Anterior)).1,
            Some(ViewerCall::SetView(View::Anterior))
        );
        assert_eq!(
            update(drag, Command::SelectColorMap(ColorMapName::Hot)).1,
            Some(ViewerCall::SetColorMap(ColorMapName::Hot))
        );
    }

    #[test]
    fn test_press_move_scenario() {
        let drag = DragState::default();
        let (drag, _) = update(drag, Command::PointerMove { x: 200.0, y: 100.0 });
        let (drag, call) = update(drag, Command::PointerDown);
        assert!(call.is_none());

        let (_, call) = update(drag, Command::PointerMove { x: 210.0, y: 105.0 });
        let expected = Quaternion::from(cgmath::Euler::new(
            Rad::from(Deg(5.0f32)),
            Rad::from(Deg(10.0f32)),
            Rad(0.0),
        ));
        assert_eq!(call, Some(ViewerCall::Rotate(expected)));
    }

    #[test]
    fn test_moves_without_press_emit_nothing() {
        let mut drag = DragState::default();
        for i in 0..10 {
            let (next, call) = update(drag, Command::PointerMove { x: i as f32, y: 0.0 });
            assert!(call.is_none());
            drag = next;
        }
        assert_eq!(drag.previous.x, 9.0);
    }

    #[test]
    fn test_drag_sequence_composes_left_to_right_in_event_order() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let start = Quaternion::from_angle_z(Deg(12.0f32));

        let mut drag = DragState::default().pointer_down();
        let mut orientation = start;
        let mut increments = Vec::new();
        for _ in 0..25 {
            let x = rng.random_range(-300.0f32..300.0);
            let y = rng.random_range(-300.0f32..300.0);
            let (next, call) = update(drag, Command::PointerMove { x, y });
            drag = next;
            if let Some(ViewerCall::Rotate(q)) = call {
                orientation = q * orientation;
                increments.push(q);
            }
        }
        assert_eq!(increments.len(), 25);

        // Same product built as (q_n * ... * q_1) * start.
        let product = increments
            .iter()
            .rev()
            .fold(Quaternion::new(1.0, 0.0, 0.0, 0.0), |acc, q| acc * *q);
        let expected = product * start;
        assert!((orientation - expected).magnitude() < 1e-4);

        // Reversing the order gives a different orientation.
        let reversed = increments.iter().fold(start, |acc, q| acc * *q);
        assert!((orientation - reversed).magnitude() > 1e-3);
    }
}
