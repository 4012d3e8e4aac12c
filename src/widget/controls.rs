//! Control panel model and binder
//!
//! A [`ControlPanel`] is a list of declarative [`ControlDescriptor`]s plus the
//! panel's presentation options. It knows nothing about drawing: the imgui
//! layer in [`crate::ui::panel`] renders it and reports edits back through
//! [`ControlPanel::change`], which yields the [`Command`] to dispatch.

use serde::Deserialize;

use crate::surface::color_map::ColorMapName;
use crate::surface::view::View;
use crate::widget::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Yorha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Right,
}

/// Title-bar placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    None,
    Overlay,
    Above,
    #[default]
    Offset,
}

/// `Inner` floats the panel inside the viewport; `Outer` docks it full-height
/// against the aligned edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelMode {
    #[default]
    Inner,
    Outer,
}

/// Presentation options for the control panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelOptions {
    pub title: String,
    pub theme: Theme,
    pub align: Align,
    pub width: f32,
    pub bar_mode: BarMode,
    pub panel_mode: PanelMode,
    pub opacity: f32,
    pub open: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            title: "Surface Viewer".to_string(),
            theme: Theme::Dark,
            align: Align::Right,
            width: 300.0,
            bar_mode: BarMode::Offset,
            panel_mode: PanelMode::Inner,
            opacity: 0.95,
            open: true,
        }
    }
}

/// What kind of input a control is, along with its current value.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    Select {
        options: Vec<String>,
        selected: usize,
    },
    Range {
        min: f32,
        max: f32,
        value: f32,
    },
}

/// A value reported by an edited control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    Option(String),
    Number(f32),
}

/// Maps an edited value to the command it triggers.
pub type OnChange = fn(&ControlValue) -> Option<Command>;

#[derive(Clone)]
pub struct ControlDescriptor {
    pub label: String,
    pub kind: ControlKind,
    pub on_change: OnChange,
}

impl std::fmt::Debug for ControlDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlDescriptor")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl ControlDescriptor {
    pub fn select<I, S>(label: &str, options: I, on_change: OnChange) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.to_string(),
            kind: ControlKind::Select {
                options: options.into_iter().map(Into::into).collect(),
                selected: 0,
            },
            on_change,
        }
    }

    pub fn range(label: &str, min: f32, max: f32, initial: f32, on_change: OnChange) -> Self {
        Self {
            label: label.to_string(),
            kind: ControlKind::Range {
                min,
                max,
                value: initial,
            },
            on_change,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ControlPanel {
    options: PanelOptions,
    controls: Vec<ControlDescriptor>,
}

impl ControlPanel {
    pub fn new(options: PanelOptions) -> Self {
        Self {
            options,
            controls: Vec::new(),
        }
    }

    pub fn register(&mut self, descriptor: ControlDescriptor) {
        log::debug!("Registering control '{}'", descriptor.label);
        self.controls.push(descriptor);
    }

    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    pub fn controls(&self) -> &[ControlDescriptor] {
        &self.controls
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.controls.iter().position(|c| c.label == label)
    }

    /// Applies an edit to control `index` and returns its command.
    ///
    /// Range values are clamped to the control's domain and select values must
    /// name one of its options; anything else is ignored.
    pub fn change(&mut self, index: usize, value: ControlValue) -> Option<Command> {
        let control = self.controls.get_mut(index)?;

        let accepted = match (&mut control.kind, value) {
            (ControlKind::Select { options, selected }, ControlValue::Option(name)) => {
                let position = options.iter().position(|o| *o == name)?;
                *selected = position;
                ControlValue::Option(name)
            }
            (ControlKind::Range { min, max, value }, ControlValue::Number(n)) => {
                // max < min happens only for a degenerate domain; pin to min.
                *value = n.min(*max).max(*min);
                ControlValue::Number(*value)
            }
            _ => return None,
        };

        (control.on_change)(&accepted)
    }

    /// [`change`](Self::change) addressed by label.
    pub fn change_by_label(&mut self, label: &str, value: ControlValue) -> Option<Command> {
        let index = self.position(label)?;
        self.change(index, value)
    }
}

/// Builds the standard panel: view, color map, threshold and contrast.
///
/// The threshold slider spans `0..=max(|lo|, |hi|)` of `intensity_range`.
pub fn setup_controls(options: PanelOptions, intensity_range: (f32, f32)) -> ControlPanel {
    let mut panel = ControlPanel::new(options);

    panel.register(ControlDescriptor::select(
        "View",
        View::ALL.iter().map(|v| v.as_str()),
        |value| match value {
            ControlValue::Option(name) => name.parse().ok().map(Command::SelectView),
            ControlValue::Number(_) => None,
        },
    ));

    panel.register(ControlDescriptor::select(
        "Color Map",
        ColorMapName::ALL.iter().map(|m| m.as_str()),
        |value| match value {
            ControlValue::Option(name) => name.parse().ok().map(Command::SelectColorMap),
            ControlValue::Number(_) => None,
        },
    ));

    let (lo, hi) = intensity_range;
    panel.register(ControlDescriptor::range(
        "Threshold",
        0.0,
        lo.abs().max(hi.abs()),
        0.0,
        |value| match value {
            ControlValue::Number(v) => Some(Command::SetThreshold(*v)),
            ControlValue::Option(_) => None,
        },
    ));

    panel.register(ControlDescriptor::range(
        "Contrast",
        0.0,
        100.0,
        0.0,
        |value| match value {
            ControlValue::Number(v) => Some(Command::SetContrast(*v)),
            ControlValue::Option(_) => None,
        },
    ));

    panel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_panel_layout() {
        let panel = setup_controls(PanelOptions::default(), (-3.0, 2.0));
        let labels: Vec<&str> = panel.controls().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["View", "Color Map", "Threshold", "Contrast"]);

        match &panel.controls()[0].kind {
            ControlKind::Select { options, selected } => {
                assert_eq!(options, &["lateral", "medial", "posterior", "anterior"]);
                assert_eq!(*selected, 0);
            }
            other => panic!("unexpected kind {:?}", other),
        }
        match &panel.controls()[1].kind {
            ControlKind::Select { options, .. } => {
                assert_eq!(options, &["jet", "summer", "hot", "cool", "spring", "bluered"]);
            }
            other => panic!("unexpected kind {:?}", other),
        }
        assert_eq!(
            panel.controls()[2].kind,
            ControlKind::Range {
                min: 0.0,
                max: 3.0,
                value: 0.0
            }
        );
        assert_eq!(
            panel.controls()[3].kind,
            ControlKind::Range {
                min: 0.0,
                max: 100.0,
                value: 0.0
            }
        );
    }

    #[test]
    fn test_select_emits_typed_commands() {
        let mut panel = setup_controls(PanelOptions::default(), (0.0, 1.0));
        assert_eq!(
            panel.change_by_label("View", ControlValue::Option("medial".into())),
            Some(Command::SelectView(View::Medial))
        );
        assert_eq!(
            panel.change_by_label("Color Map", ControlValue::Option("jet".into())),
            Some(Command::SelectColorMap(ColorMapName::Jet))
        );
    }

    #[test]
    fn test_select_rejects_foreign_option() {
        let mut panel = setup_controls(PanelOptions::default(), (0.0, 1.0));
        assert_eq!(
            panel.change_by_label("View", ControlValue::Option("dorsal".into())),
            None
        );
        assert_eq!(
            panel.change_by_label("View", ControlValue::Number(1.0)),
            None
        );
    }

    #[test]
    fn test_select_tracks_selection() {
        let mut panel = setup_controls(PanelOptions::default(), (0.0, 1.0));
        panel.change(1, ControlValue::Option("spring".into()));
        match &panel.controls()[1].kind {
            ControlKind::Select { selected, .. } => assert_eq!(*selected, 4),
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_range_is_clamped_to_domain() {
        let mut panel = setup_controls(PanelOptions::default(), (-5.0, 4.0));
        assert_eq!(
            panel.change_by_label("Threshold", ControlValue::Number(9.0)),
            Some(Command::SetThreshold(5.0))
        );
        assert_eq!(
            panel.change_by_label("Contrast", ControlValue::Number(-10.0)),
            Some(Command::SetContrast(0.0))
        );
        assert_eq!(
            panel.change_by_label("Contrast", ControlValue::Number(42.0)),
            Some(Command::SetContrast(42.0))
        );
    }

    #[test]
    fn test_zero_intensity_range_gives_pinned_threshold() {
        let mut panel = setup_controls(PanelOptions::default(), (0.0, 0.0));
        assert_eq!(
            panel.change_by_label("Threshold", ControlValue::Number(1.0)),
            Some(Command::SetThreshold(0.0))
        );
    }

    #[test]
    fn test_unknown_control() {
        let mut panel = setup_controls(PanelOptions::default(), (0.0, 1.0));
        assert_eq!(panel.change(17, ControlValue::Number(1.0)), None);
        assert_eq!(panel.change_by_label("Opacity", ControlValue::Number(1.0)), None);
    }

    #[test]
    fn test_panel_options_from_json() {
        let options: PanelOptions =
            serde_json::from_str(r#"{"title": "lh.pial", "theme": "light", "align": "left"}"#)
                .unwrap();
        assert_eq!(options.title, "lh.pial");
        assert_eq!(options.theme, Theme::Light);
        assert_eq!(options.align, Align::Left);
        assert_eq!(options.width, 300.0);
        assert_eq!(options.bar_mode, BarMode::Offset);
        assert!(options.open);
    }
}
