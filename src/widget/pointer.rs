//! Pointer-to-rotation adapter
//!
//! Turns pointer drags on the render surface into incremental rotations of
//! the displayed object. One pixel of drag is one degree of rotation: vertical
//! motion pitches about X, horizontal motion yaws about Y.

use cgmath::{Deg, Euler, Point2, Quaternion, Rad, Vector2};

/// Per-surface drag tracking.
///
/// `previous` starts at the origin, so the first move after a press with no
/// earlier move is measured from `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub dragging: bool,
    pub previous: Point2<f32>,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            dragging: false,
            previous: Point2::new(0.0, 0.0),
        }
    }
}

impl DragState {
    pub fn pointer_down(self) -> Self {
        Self {
            dragging: true,
            ..self
        }
    }

    pub fn pointer_up(self) -> Self {
        Self {
            dragging: false,
            ..self
        }
    }

    /// Records the new pointer position and, while dragging, returns the
    /// delta from the previous one.
    pub fn pointer_move(self, x: f32, y: f32) -> (Self, Option<Vector2<f32>>) {
        let current = Point2::new(x, y);
        let delta = current - self.previous;
        let next = Self {
            previous: current,
            ..self
        };

        (next, self.dragging.then_some(delta))
    }
}

/// Rotation for a drag of `(dx, dy)` pixels: pitch = `dy`°, yaw = `dx`°,
/// roll = 0, composed in X-Y-Z order.
pub fn rotation_increment(delta: Vector2<f32>) -> Quaternion<f32> {
    let pitch: Rad<f32> = Deg(delta.y).into();
    let yaw: Rad<f32> = Deg(delta.x).into();
    Quaternion::from(Euler::new(pitch, yaw, Rad(0.0)))
}
