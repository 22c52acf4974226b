use crate::color::Color;

/// Phong material: diffuse colour, reflected colour and shininess.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub kd: Color,
    pub ks: Color,
    pub ns: f32,
}

impl Material {
    pub fn new(kd: Color, ks: Color, ns: f32) -> Self {
        Material { kd, ks, ns }
    }

    pub fn diffuse(kd: Color) -> Self {
        Material { kd, ks: Color::BLACK, ns: 0.0 }
    }
}

impl Default for Material {
    // magenta, so a missing material stands out in the picture
    fn default() -> Self {
        Material::diffuse(Color(1.0, 0.0, 1.0))
    }
}
