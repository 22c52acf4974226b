use serde::Deserialize;

use crate::color::Color;

/// Maps accumulated light to the displayable [0, 1] range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tonemap {
    #[default]
    Clamp,
    Reinhard,
}

impl Tonemap {
    pub fn apply(self, c: Color) -> Color {
        match self {
            Tonemap::Clamp => clamp(c),
            Tonemap::Reinhard => reinhard(c),
        }
    }

    pub fn to_rgb8(self, c: Color) -> [u8; 3] {
        let c = self.apply(c);
        [
            (c.0 * 255.0).min(255.0) as u8,
            (c.1 * 255.0).min(255.0) as u8,
            (c.2 * 255.0).min(255.0) as u8,
        ]
    }
}

pub fn clamp(c: Color) -> Color {
    c.map(|x| x.clamp(0.0, 1.0))
}

pub fn reinhard(c: Color) -> Color {
    c.map(|x| {
        let x = x.max(0.0);
        x / (1.0 + x)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_to_bytes() {
        assert_eq!(Tonemap::Clamp.to_rgb8(Color(2.0, -1.0, 0.5)), [255, 0, 127]);
        assert_eq!(Tonemap::Clamp.to_rgb8(Color::WHITE), [255, 255, 255]);
    }

    #[test]
    fn reinhard_compresses() {
        assert_eq!(reinhard(Color(1.0, 0.0, 3.0)), Color(0.5, 0.0, 0.75));
        assert_eq!(Tonemap::Reinhard.to_rgb8(Color(1.0, -2.0, 3.0)), [127, 0, 191]);
    }
}
