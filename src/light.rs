use crate::algebra::Point3;
use crate::color::Color;

/// Point light.
#[derive(Clone, Copy, Debug)]
pub struct Light {
    pub position: Point3,
    pub color: Color,
}

impl Light {
    pub fn new(position: Point3, color: Color) -> Self {
        Light { position, color }
    }
}
