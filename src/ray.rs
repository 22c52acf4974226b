use crate::algebra::{Point3, Vec3};

/// Half-line starting at `origin`, with a unit `direction`.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    /// The direction is normalized here; every intersection routine relies on it.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction: direction.unit() }
    }

    /// Ray leaving `from` and heading toward `to`.
    pub fn between(from: Point3, to: Point3) -> Self {
        Ray::new(from, from.to(to))
    }

    pub fn at(&self, distance: f32) -> Point3 {
        self.origin + self.direction * distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_unit() {
        let ray = Ray::new(Point3::ORIGIN, Vec3(0.0, 0.0, -7.0));
        assert_eq!(ray.direction, Vec3(0.0, 0.0, -1.0));
        assert_eq!(ray.at(2.0), Point3(0.0, 0.0, -2.0));
    }

    #[test]
    fn ray_between_points() {
        let from = Point3(0.0, 0.0, 10.0);
        let to = Point3(0.0, 0.0, 1.0);
        let ray = Ray::between(from, to);
        assert_eq!(ray.origin, from);
        assert_eq!(ray.direction, Vec3(0.0, 0.0, -1.0));
        assert_eq!(ray.at(9.0), to);
    }
}
