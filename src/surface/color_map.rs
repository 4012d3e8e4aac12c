//! Named color maps
//!
//! A color map is a piecewise-linear lookup table from a normalised scalar in
//! `[0, 1]` to linear RGB. The registry holds the six maps the control panel
//! offers; [`ColorMapName`] is the key type and [`ColorMap::named`] resolves a
//! user-supplied string.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Registry key for a color map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMapName {
    #[default]
    Jet,
    Summer,
    Hot,
    Cool,
    Spring,
    BlueRed,
}

impl ColorMapName {
    /// Every registered map, in panel order.
    pub const ALL: [ColorMapName; 6] = [
        ColorMapName::Jet,
        ColorMapName::Summer,
        ColorMapName::Hot,
        ColorMapName::Cool,
        ColorMapName::Spring,
        ColorMapName::BlueRed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMapName::Jet => "jet",
            ColorMapName::Summer => "summer",
            ColorMapName::Hot => "hot",
            ColorMapName::Cool => "cool",
            ColorMapName::Spring => "spring",
            ColorMapName::BlueRed => "bluered",
        }
    }

    /// Looks the name up in the registry.
    pub fn color_map(self) -> ColorMap {
        let stops: &'static [(f32, [f32; 3])] = match self {
            ColorMapName::Jet => &JET,
            ColorMapName::Summer => &SUMMER,
            ColorMapName::Hot => &HOT,
            ColorMapName::Cool => &COOL,
            ColorMapName::Spring => &SPRING,
            ColorMapName::BlueRed => &BLUE_RED,
        };
        ColorMap { name: self, stops }
    }
}

impl fmt::Display for ColorMapName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMapName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorMapName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownColorMap(s.to_string()))
    }
}

const JET: [(f32, [f32; 3]); 6] = [
    (0.0, [0.0, 0.0, 0.5]),
    (0.125, [0.0, 0.0, 1.0]),
    (0.375, [0.0, 1.0, 1.0]),
    (0.625, [1.0, 1.0, 0.0]),
    (0.875, [1.0, 0.0, 0.0]),
    (1.0, [0.5, 0.0, 0.0]),
];

const SUMMER: [(f32, [f32; 3]); 2] = [(0.0, [0.0, 0.5, 0.4]), (1.0, [1.0, 1.0, 0.4])];

const HOT: [(f32, [f32; 3]); 4] = [
    (0.0, [0.04, 0.0, 0.0]),
    (0.375, [1.0, 0.0, 0.0]),
    (0.75, [1.0, 1.0, 0.0]),
    (1.0, [1.0, 1.0, 1.0]),
];

const COOL: [(f32, [f32; 3]); 2] = [(0.0, [0.0, 1.0, 1.0]), (1.0, [1.0, 0.0, 1.0])];

const SPRING: [(f32, [f32; 3]); 2] = [(0.0, [1.0, 0.0, 1.0]), (1.0, [1.0, 1.0, 0.0])];

const BLUE_RED: [(f32, [f32; 3]); 3] = [
    (0.0, [0.0, 0.0, 1.0]),
    (0.5, [1.0, 1.0, 1.0]),
    (1.0, [1.0, 0.0, 0.0]),
];

/// A resolved color map: its registry name and sorted color stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMap {
    name: ColorMapName,
    stops: &'static [(f32, [f32; 3])],
}

impl ColorMap {
    /// Resolves a map by its case-insensitive registry name.
    pub fn named(name: &str) -> Result<Self, Error> {
        name.parse::<ColorMapName>().map(ColorMapName::color_map)
    }

    pub fn name(&self) -> ColorMapName {
        self.name
    }

    /// Samples the map at `t`, clamped to `[0, 1]`. NaN samples the low end.
    pub fn sample(&self, t: f32) -> [f32; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let mut lower = self.stops[0];
        for &upper in &self.stops[1..] {
            if t <= upper.0 {
                let span = upper.0 - lower.0;
                let s = if span > 0.0 { (t - lower.0) / span } else { 0.0 };
                return lerp(lower.1, upper.1, s);
            }
            lower = upper;
        }
        lower.1
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        ColorMapName::Jet.color_map()
    }
}

fn lerp(a: [f32; 3], b: [f32; 3], s: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * s,
        a[1] + (b[1] - a[1]) * s,
        a[2] + (b[2] - a[2]) * s,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_registry() {
        for name in ColorMapName::ALL {
            let map = ColorMap::named(name.as_str()).unwrap();
            assert_eq!(map.name(), name);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = ColorMap::named("viridis").unwrap_err();
        assert!(matches!(err, Error::UnknownColorMap(ref n) if n == "viridis"));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("BlueRed".parse::<ColorMapName>().unwrap(), ColorMapName::BlueRed);
    }

    #[test]
    fn test_sample_hits_end_stops() {
        let jet = ColorMapName::Jet.color_map();
        assert_eq!(jet.sample(0.0), [0.0, 0.0, 0.5]);
        assert_eq!(jet.sample(1.0), [0.5, 0.0, 0.0]);
        assert_eq!(jet.sample(-3.0), [0.0, 0.0, 0.5]);
        assert_eq!(jet.sample(7.0), [0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_sample_interpolates_between_stops() {
        let bluered = ColorMapName::BlueRed.color_map();
        assert_eq!(bluered.sample(0.5), [1.0, 1.0, 1.0]);
        let quarter = bluered.sample(0.25);
        assert!((quarter[0] - 0.5).abs() < 1e-6);
        assert!((quarter[2] - 1.0).abs() < 1e-6);
    }
}
