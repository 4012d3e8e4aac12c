// src/ui/panel.rs
//! Control panel drawing
//!
//! Renders a [`ControlPanel`] as an imgui window and reports edits as widget
//! commands. Placement is computed separately by [`panel_layout`] so it can be
//! checked without an imgui context.

use crate::widget::command::Command;
use crate::widget::controls::{
    Align, BarMode, ControlKind, ControlPanel, ControlValue, PanelMode, PanelOptions,
};

/// Gap between a floating panel and the viewport edge.
const MARGIN: f32 = 10.0;
/// Extra vertical offset for [`BarMode::Offset`].
const BAR_OFFSET: f32 = 24.0;

/// Where and how the panel window is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub position: [f32; 2],
    pub width: f32,
    /// Fixed height for docked panels; floating panels size to content.
    pub height: Option<f32>,
    pub title_bar: bool,
    pub movable: bool,
}

pub fn panel_layout(options: &PanelOptions, display_size: [f32; 2]) -> PanelLayout {
    let [display_w, display_h] = display_size;

    match options.panel_mode {
        PanelMode::Outer => {
            let width = options.width.min(display_w).max(0.0);
            let x = match options.align {
                Align::Left => 0.0,
                Align::Right => (display_w - width).max(0.0),
            };
            PanelLayout {
                position: [x, 0.0],
                width,
                height: Some(display_h.max(0.0)),
                title_bar: options.bar_mode != BarMode::None,
                movable: false,
            }
        }
        PanelMode::Inner => {
            let width = options.width.min(display_w - 2.0 * MARGIN).max(0.0);
            let x = match options.align {
                Align::Left => MARGIN,
                Align::Right => (display_w - width - MARGIN).max(0.0),
            };
            let y = match options.bar_mode {
                BarMode::Offset => MARGIN + BAR_OFFSET,
                _ => MARGIN,
            };
            PanelLayout {
                position: [x, y],
                width,
                height: None,
                title_bar: options.bar_mode != BarMode::None,
                movable: options.bar_mode == BarMode::Above,
            }
        }
    }
}

/// Draws the panel and returns the commands produced by this frame's edits.
pub fn draw_control_panel(ui: &imgui::Ui, panel: &mut ControlPanel) -> Vec<Command> {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return Vec::new();
    }

    let options = panel.options();
    let layout = panel_layout(options, display_size);
    let position_condition = if layout.movable {
        imgui::Condition::FirstUseEver
    } else {
        imgui::Condition::Always
    };

    let mut edits: Vec<(usize, ControlValue)> = Vec::new();

    ui.window(&options.title)
        .position(layout.position, position_condition)
        .size(
            [layout.width, layout.height.unwrap_or(0.0)],
            imgui::Condition::Always,
        )
        .bg_alpha(options.opacity.clamp(0.0, 1.0))
        .title_bar(layout.title_bar)
        .collapsed(!options.open, imgui::Condition::FirstUseEver)
        .movable(layout.movable)
        .resizable(false)
        .build(|| {
            for (index, control) in panel.controls().iter().enumerate() {
                match &control.kind {
                    ControlKind::Select {
                        options: choices,
                        selected,
                    } => {
                        let mut current = *selected;
                        if ui.combo_simple_string(&control.label, &mut current, choices.as_slice()) {
                            if let Some(name) = choices.get(current) {
                                edits.push((index, ControlValue::Option(name.clone())));
                            }
                        }
                    }
                    ControlKind::Range { min, max, value } => {
                        let mut current = *value;
                        if ui.slider(&control.label, *min, *max, &mut current) {
                            edits.push((index, ControlValue::Number(current)));
                        }
                    }
                }
            }
        });

    edits
        .into_iter()
        .filter_map(|(index, value)| panel.change(index, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_floats_top_right() {
        let layout = panel_layout(&PanelOptions::default(), [1200.0, 800.0]);
        assert_eq!(layout.position, [1200.0 - 300.0 - MARGIN, MARGIN + BAR_OFFSET]);
        assert_eq!(layout.width, 300.0);
        assert_eq!(layout.height, None);
        assert!(layout.title_bar);
        assert!(!layout.movable);
    }

    #[test]
    fn test_outer_panel_docks_full_height() {
        let options = PanelOptions {
            panel_mode: PanelMode::Outer,
            align: Align::Left,
            bar_mode: BarMode::None,
            ..PanelOptions::default()
        };
        let layout = panel_layout(&options, [1024.0, 768.0]);
        assert_eq!(layout.position, [0.0, 0.0]);
        assert_eq!(layout.height, Some(768.0));
        assert!(!layout.title_bar);
    }

    #[test]
    fn test_panel_never_wider_than_viewport() {
        let options = PanelOptions {
            width: 500.0,
            ..PanelOptions::default()
        };
        let layout = panel_layout(&options, [200.0, 100.0]);
        assert_eq!(layout.width, 200.0 - 2.0 * MARGIN);
        assert_eq!(layout.position[0], MARGIN);
    }

    #[test]
    fn test_above_bar_is_movable() {
        let options = PanelOptions {
            bar_mode: BarMode::Above,
            ..PanelOptions::default()
        };
        let layout = panel_layout(&options, [800.0, 600.0]);
        assert!(layout.movable);
        assert_eq!(layout.position[1], MARGIN);
    }
}
