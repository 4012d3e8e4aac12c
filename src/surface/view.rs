//! View presets
//!
//! Surfaces are stored in RAS object space (x right, y anterior, z superior).
//! The camera looks down -z with +y up, so every preset first tips the brain so
//! superior is screen-up, then turns it about the screen's vertical axis.

use std::fmt;
use std::str::FromStr;

use cgmath::{Deg, Quaternion, Rotation3};
use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Lateral,
    Medial,
    Posterior,
    Anterior,
}

impl View {
    /// Every preset, in panel order.
    pub const ALL: [View; 4] = [View::Lateral, View::Medial, View::Posterior, View::Anterior];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Lateral => "lateral",
            View::Medial => "medial",
            View::Posterior => "posterior",
            View::Anterior => "anterior",
        }
    }

    /// Object orientation showing this face of `hemisphere` to the camera.
    pub fn orientation(self, hemisphere: Hemisphere) -> Quaternion<f32> {
        let upright = Quaternion::from_angle_x(Deg(-90.0));
        // Left lateral faces -x, which a +90° turn brings to +z.
        let toward_left = Deg(90.0);
        let toward_right = Deg(-90.0);

        let turn = match (self, hemisphere) {
            (View::Posterior, _) => Deg(0.0),
            (View::Anterior, _) => Deg(180.0),
            (View::Lateral, Hemisphere::Left) | (View::Medial, Hemisphere::Right) => toward_left,
            (View::Lateral, Hemisphere::Right) | (View::Medial, Hemisphere::Left) => toward_right,
        };

        Quaternion::from_angle_y(turn) * upright
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .iter()
            .copied()
            .find(|view| view.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownView(s.to_string()))
    }
}

/// Which cerebral hemisphere a surface belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    #[default]
    Left,
    Right,
}

impl FromStr for Hemisphere {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "lh" => Ok(Hemisphere::Left),
            "right" | "rh" => Ok(Hemisphere::Right),
            _ => Err(Error::UnknownHemisphere(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Rotation, Vector3};

    fn assert_vec_close(actual: Vector3<f32>, expected: Vector3<f32>) {
        let diff = actual - expected;
        assert!(
            diff.x.abs() < 1e-5 && diff.y.abs() < 1e-5 && diff.z.abs() < 1e-5,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_left_lateral_faces_camera() {
        let q = View::Lateral.orientation(Hemisphere::Left);
        assert_vec_close(q.rotate_vector(-Vector3::unit_x()), Vector3::unit_z());
        assert_vec_close(q.rotate_vector(Vector3::unit_z()), Vector3::unit_y());
    }

    #[test]
    fn test_right_lateral_faces_camera() {
        let q = View::Lateral.orientation(Hemisphere::Right);
        assert_vec_close(q.rotate_vector(Vector3::unit_x()), Vector3::unit_z());
    }

    #[test]
    fn test_posterior_and_anterior() {
        let posterior = View::Posterior.orientation(Hemisphere::Left);
        assert_vec_close(posterior.rotate_vector(-Vector3::unit_y()), Vector3::unit_z());

        let anterior = View::Anterior.orientation(Hemisphere::Left);
        assert_vec_close(anterior.rotate_vector(Vector3::unit_y()), Vector3::unit_z());
        assert_vec_close(anterior.rotate_vector(Vector3::unit_z()), Vector3::unit_y());
    }

    #[test]
    fn test_medial_mirrors_lateral_across_hemispheres() {
        let left_medial = View::Medial.orientation(Hemisphere::Left);
        let right_lateral = View::Lateral.orientation(Hemisphere::Right);
        assert_eq!(left_medial, right_lateral);
    }

    #[test]
    fn test_parse_views() {
        assert_eq!("posterior".parse::<View>().unwrap(), View::Posterior);
        assert!(matches!("dorsal".parse::<View>(), Err(Error::UnknownView(_))));
        assert_eq!("rh".parse::<Hemisphere>().unwrap(), Hemisphere::Right);
    }
}
