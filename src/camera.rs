use serde::Deserialize;

use crate::{
    algebra::{point3_from_array, vec3_from_array, Point3, Vec3},
    constants::{FIELD, SCREEN_DISTANCE},
    ray::Ray,
};

/// Pinhole camera, one ray through the centre of every pixel.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Point3,
    pub forward : Vec3,
    pub right   : Vec3,
    pub up      : Vec3,
    pub fov     : f32,
    scale       : f32,
}

impl Camera {
    /// `fov` is the vertical field of view, in degrees.
    pub fn new(position: Point3, look_at: Point3, up: Vec3, fov: f32) -> Self {
        let forward = position.to(look_at).unit();
        let right   = forward.cross(up).unit();
        let real_up = right.cross(forward).unit();
        Camera {
            position,
            forward,
            right,
            up: real_up,
            fov,
            scale: (fov.to_radians() * 0.5).tan(),
        }
    }

    /// Primary ray through pixel `(x, y)` of a `w`×`h` image, `y` going down.
    pub fn ray(&self, x: u32, y: u32, w: u32, h: u32) -> Ray {
        let aspect = w as f32 / h as f32;
        let u =  ((x as f32 + 0.5) / w as f32 - 0.5) * 2.0 * aspect * self.scale;
        let v = -((y as f32 + 0.5) / h as f32 - 0.5) * 2.0 * self.scale;
        let rd = self.right.scale(u).add(self.up.scale(v)).add(self.forward);
        Ray::new(self.position, rd)
    }
}

impl Default for Camera {
    fn default() -> Self {
        CameraJson::default().into()
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct CameraJson {
    #[serde(deserialize_with = "point3_from_array")]
    pub pos: Point3,
    #[serde(deserialize_with = "point3_from_array")]
    pub look_at: Point3,
    #[serde(deserialize_with = "vec3_from_array")]
    pub up: Vec3,
    pub fov: f32,
}

impl Default for CameraJson {
    // on the Z axis, looking at the origin, image plane half-height FIELD at unit distance
    fn default() -> Self {
        CameraJson {
            pos: Point3(0.0, 0.0, SCREEN_DISTANCE),
            look_at: Point3::ORIGIN,
            up: Vec3(0.0, 1.0, 0.0),
            fov: 2.0 * FIELD.atan().to_degrees(),
        }
    }
}

impl From<CameraJson> for Camera {
    fn from(c: CameraJson) -> Self {
        Camera::new(c.pos, c.look_at, c.up, c.fov)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_basis() {
        let camera = Camera::default();
        assert_eq!(camera.position, Point3(0.0, 0.0, 10.0));
        assert_eq!(camera.forward, Vec3(0.0, 0.0, -1.0));
        assert_eq!(camera.right, Vec3(1.0, 0.0, 0.0));
        assert_eq!(camera.up, Vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn centre_pixel_looks_forward() {
        let camera = Camera::default();
        let ray = camera.ray(0, 0, 1, 1);
        assert!(ray.direction.sub(camera.forward).norm() < 1e-6);
    }

    #[test]
    fn image_corners() {
        let camera = Camera::default();
        let top_left = camera.ray(0, 0, 4, 2).direction;
        assert!(top_left.0 < 0.0 && top_left.1 > 0.0);
        let bottom_right = camera.ray(3, 1, 4, 2).direction;
        assert!(bottom_right.0 > 0.0 && bottom_right.1 < 0.0);
        // half-height of the view at unit distance is FIELD
        let top = camera.ray(0, 0, 1, 1_000).direction;
        let slope = top.1 / -top.2;
        assert!((slope - FIELD).abs() < 1e-3, "{}", slope);
    }
}
