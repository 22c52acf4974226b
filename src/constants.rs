//! Global constants of the renderer.

use crate::color::Color;

/// Largest distance along a ray; stands for "no intersection".
pub const INFINITY: f32 = 1e38;

/// Smallest meaningful distance (depends on the scale of the scene).
pub const EPSILON: f32 = 1e-5;

// default camera
pub const SCREEN_DISTANCE: f32 = 10.0;
pub const FIELD: f32 = 0.25;

// default output
pub const IMAGE_WIDTH: u32 = 800;
pub const IMAGE_HEIGHT: u32 = 600;

/// Number of successive reflected rays.
pub const MAX_REFLECTIONS: u32 = 5;

/// Angular spacing of the polka-dot grid, in degrees.
pub const DOT_SPACING: f32 = 22.0;
/// A point is on a dot when closer than this fraction of the spacing to a grid node.
pub const DOT_RADIUS_RATIO: f32 = 0.3;
pub const DOT_COLOR: Color = Color(1.0, 1.0, 1.0);

/// Width of a latitude band on a sliced sphere, in degrees.
pub const SLICE_WIDTH: f32 = 15.0;

pub const SKY: Color = Color(0.5, 0.7, 1.0);
