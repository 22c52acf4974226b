use serde::Deserialize;
use std::ops::{Add, AddAssign, Mul};

/// Channel intensities, unclamped while light is being accumulated.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Color(pub f32, pub f32, pub f32);

impl Color {
    pub const BLACK: Color = Color(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0);

    pub fn add(self, c: Self) -> Self { Self(self.0+c.0, self.1+c.1, self.2+c.2) }
    pub fn mul(self, c: Self) -> Self { Self(self.0*c.0, self.1*c.1, self.2*c.2) }
    pub fn scale(self, f: f32) -> Self { Self(self.0*f, self.1*f, self.2*f) }

    pub fn map(self, f: impl Fn(f32) -> f32) -> Self { Self(f(self.0), f(self.1), f(self.2)) }
}

impl Add for Color {
    type Output = Color;
    fn add(self, c: Color) -> Color { Color::add(self, c) }
}

impl AddAssign for Color {
    fn add_assign(&mut self, c: Color) { *self = Color::add(*self, c); }
}

impl Mul for Color {
    type Output = Color;
    fn mul(self, c: Color) -> Color { Color::mul(self, c) }
}

impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, f: f32) -> Color { self.scale(f) }
}

impl From<[f32; 3]> for Color {
    fn from(a: [f32; 3]) -> Self { Color(a[0], a[1], a[2]) }
}

pub fn color_from_array<'de, D>(d: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let arr = <[f32; 3]>::deserialize(d)?;
    Ok(arr.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine() {
        let kd = Color(1.0, 0.5, 0.0);
        let light = Color(0.5, 0.5, 2.0);
        assert_eq!(kd * light, Color(0.5, 0.25, 0.0));
        assert_eq!(kd * 2.0, Color(2.0, 1.0, 0.0));
        let mut acc = Color::BLACK;
        acc += kd;
        acc += kd;
        assert_eq!(acc, Color(2.0, 1.0, 0.0));
    }
}
