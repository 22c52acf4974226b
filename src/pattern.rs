//! Surface patterns layered on a sphere.
//!
//! A pattern is chosen once, when the sphere is built. `Dotted` only changes the
//! colours used for shading, `Sliced` only changes which roots of the ray/sphere
//! equation are accepted.

use serde::Deserialize;

use crate::{
    algebra::Vec3,
    color::Color,
    constants::{DOT_COLOR, DOT_RADIUS_RATIO, DOT_SPACING, SLICE_WIDTH},
    material::Material,
};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Pattern {
    #[default]
    Plain,
    /// Polka dots on a longitude/latitude grid, `spacing` degrees apart.
    Dotted { spacing: f32, accent: Color },
    /// Latitude bands `width` degrees wide, alternately solid and open.
    Sliced { width: f32 },
}

impl Pattern {
    pub fn dotted() -> Self {
        Pattern::Dotted { spacing: DOT_SPACING, accent: DOT_COLOR }
    }

    pub fn sliced() -> Self {
        Pattern::Sliced { width: SLICE_WIDTH }
    }

    /// Band width and dot spacing must be finite and positive.
    pub fn is_valid(&self) -> bool {
        match *self {
            Pattern::Plain => true,
            Pattern::Dotted { spacing, .. } => spacing.is_finite() && spacing > 0.0,
            Pattern::Sliced { width } => width.is_finite() && width > 0.0,
        }
    }

    /// Colours `(Kd, Ks)` in effect at the point of unit normal `n`.
    pub fn colors(&self, material: &Material, n: Vec3) -> (Color, Color) {
        match *self {
            Pattern::Dotted { spacing, accent } if on_dot(n, spacing) => (accent, Color::BLACK),
            _ => (material.kd, material.ks),
        }
    }
}

/// Elevation of the unit normal `n`, in degrees.
pub fn latitude(n: Vec3) -> f32 {
    n.1.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Azimuth of the unit normal `n` around the Y axis, in degrees.
pub fn longitude(n: Vec3) -> f32 {
    n.2.atan2(n.0).to_degrees()
}

/// True when `n` points into a solid band of a sphere sliced every `width` degrees.
///
/// Bands are counted from the equator; band `[0, width)` is solid, band
/// `[-width, 0)` is open and so on, alternating on both hemispheres.
pub fn in_solid_band(n: Vec3, width: f32) -> bool {
    let band = (latitude(n) / width).floor() as i64;
    band.rem_euclid(2) == 0
}

/// True when `n` falls inside a dot of a grid `spacing` degrees wide.
pub fn on_dot(n: Vec3, spacing: f32) -> bool {
    let lon = longitude(n);
    let lat = latitude(n);
    let dlon = lon - (lon / spacing).round() * spacing;
    let dlat = lat - (lat / spacing).round() * spacing;
    (dlon * dlon + dlat * dlat).sqrt() < DOT_RADIUS_RATIO * spacing
}

/* JSON form: "plain", "dotted", "sliced", or an object with explicit parameters */
#[derive(Deserialize)]
#[serde(untagged)]
pub enum PatternJson {
    Name(PatternName),
    Detailed(PatternDetail),
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternName {
    Plain,
    Dotted,
    Sliced,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternDetail {
    Dotted {
        #[serde(default = "default_spacing")]
        spacing: f32,
        #[serde(default = "default_accent", deserialize_with = "crate::color::color_from_array")]
        accent: Color,
    },
    Sliced {
        #[serde(default = "default_width")]
        width: f32,
    },
}

fn default_spacing() -> f32 { DOT_SPACING }
fn default_accent() -> Color { DOT_COLOR }
fn default_width() -> f32 { SLICE_WIDTH }

impl From<PatternJson> for Pattern {
    fn from(p: PatternJson) -> Self {
        match p {
            PatternJson::Name(PatternName::Plain) => Pattern::Plain,
            PatternJson::Name(PatternName::Dotted) => Pattern::dotted(),
            PatternJson::Name(PatternName::Sliced) => Pattern::sliced(),
            PatternJson::Detailed(PatternDetail::Dotted { spacing, accent }) => {
                Pattern::Dotted { spacing, accent }
            }
            PatternJson::Detailed(PatternDetail::Sliced { width }) => Pattern::Sliced { width },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_latitude(deg: f32) -> Vec3 {
        let r = deg.to_radians();
        Vec3(r.cos(), r.sin(), 0.0)
    }

    #[test]
    fn bands_alternate_across_equator() {
        assert!(in_solid_band(at_latitude(5.0), 15.0));
        assert!(!in_solid_band(at_latitude(20.0), 15.0));
        assert!(in_solid_band(at_latitude(40.0), 15.0));
        assert!(!in_solid_band(at_latitude(-5.0), 15.0));
        assert!(in_solid_band(at_latitude(-20.0), 15.0));
        assert!(!in_solid_band(at_latitude(-40.0), 15.0));
    }

    #[test]
    fn dot_at_grid_node() {
        // longitude 0, latitude 0 is a grid node
        assert!(on_dot(Vec3(1.0, 0.0, 0.0), 22.0));
        // halfway between nodes on both axes
        let lon = 11.0f32.to_radians();
        let lat = 11.0f32.to_radians();
        let n = Vec3(lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin());
        assert!(!on_dot(n, 22.0));
    }

    #[test]
    fn dotted_colors_override_material() {
        let material = Material::new(Color(1.0, 0.0, 0.0), Color(0.5, 0.5, 0.5), 10.0);
        let dotted = Pattern::dotted();
        let (kd, ks) = dotted.colors(&material, Vec3(1.0, 0.0, 0.0));
        assert_eq!(kd, DOT_COLOR);
        assert_eq!(ks, Color::BLACK);

        let lon = 11.0f32.to_radians();
        let lat = 11.0f32.to_radians();
        let off = Vec3(lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin());
        assert_eq!(dotted.colors(&material, off), (material.kd, material.ks));
        assert_eq!(Pattern::Plain.colors(&material, Vec3(1.0, 0.0, 0.0)), (material.kd, material.ks));
    }

    #[test]
    fn degenerate_parameters_are_invalid() {
        assert_eq!(Pattern::default(), Pattern::Plain);
        assert!(Pattern::default().is_valid());
        assert!(Pattern::dotted().is_valid());
        assert!(Pattern::sliced().is_valid());
        assert!(!Pattern::Sliced { width: 0.0 }.is_valid());
        assert!(!Pattern::Sliced { width: -15.0 }.is_valid());
        assert!(!Pattern::Sliced { width: f32::NAN }.is_valid());
        assert!(!Pattern::Dotted { spacing: 0.0, accent: DOT_COLOR }.is_valid());
        assert!(!Pattern::Dotted { spacing: f32::INFINITY, accent: DOT_COLOR }.is_valid());
    }

    #[test]
    fn parse_pattern() {
        let p: PatternJson = serde_json::from_str(r#""sliced""#).unwrap();
        assert_eq!(Pattern::from(p), Pattern::Sliced { width: SLICE_WIDTH });
        let p: PatternJson = serde_json::from_str(r#"{"dotted": {"spacing": 30.0}}"#).unwrap();
        assert_eq!(Pattern::from(p), Pattern::Dotted { spacing: 30.0, accent: DOT_COLOR });
    }
}
