//! src/sphere.rs
//! -------------
//! Sphere with a Phong material and an optional surface pattern.

use crate::{
    algebra::{Point3, Vec3},
    constants::INFINITY,
    material::Material,
    pattern::{in_solid_band, Pattern},
    ray::Ray,
};

/// Which face of the surface a ray stopped on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Outside,
    /// The ray went through an open band of a sliced sphere and hit it from within.
    Inside,
}

/// Accepted root of the ray/sphere equation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub distance: f32,
    pub side: Side,
}

#[derive(Clone, Debug)]
pub struct Sphere {
    pub name     : String,
    pub center   : Point3,
    pub radius   : f32,
    pub material : Material,
    pub pattern  : Pattern,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32, material: Material) -> Self {
        Sphere {
            name: String::new(),
            center,
            radius,
            material,
            pattern: Pattern::Plain,
        }
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Outward unit normal at `point`, assumed to lie on the surface.
    pub fn normal_at(&self, point: Point3) -> Vec3 {
        self.center.to(point).unit()
    }

    /// Nearest hit in front of the ray origin accepted by the sphere's pattern.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let (near, far) = self.roots(ray)?;
        match self.pattern {
            Pattern::Sliced { width } => self.sliced_hit(ray, near, far, width),
            Pattern::Plain | Pattern::Dotted { .. } => {
                (near < INFINITY).then(|| Intersection { distance: near, side: Side::Outside })
            }
        }
    }

    /// Both roots of `k² + bk + c = 0`, smallest first, each replaced by
    /// [`INFINITY`] when it is not strictly in front of the origin.
    /// The ray direction is unit length, so the quadratic coefficient is 1.
    fn roots(&self, ray: &Ray) -> Option<(f32, f32)> {
        let cp = self.center.to(ray.origin);
        let b = 2.0 * ray.direction.dot(cp);
        let c = cp.dot(cp) - self.radius * self.radius;

        let delta = b * b - 4.0 * c;
        if delta < 0.0 {
            return None;
        }

        let sqrt_delta = delta.sqrt();
        let mut k1 = (-b + sqrt_delta) / 2.0;
        let mut k2 = (-b - sqrt_delta) / 2.0;
        if k1 <= 0.0 { k1 = INFINITY; }
        if k2 <= 0.0 { k2 = INFINITY; }

        Some(if k1 <= k2 { (k1, k2) } else { (k2, k1) })
    }

    /// A sliced sphere only exists in its solid bands: when the nearest root falls
    /// in an open band the ray enters the sphere and may hit the inner face opposite.
    fn sliced_hit(&self, ray: &Ray, near: f32, far: f32, width: f32) -> Option<Intersection> {
        if near >= INFINITY {
            return None;
        }
        if in_solid_band(self.normal_at(ray.at(near)), width) {
            return Some(Intersection { distance: near, side: Side::Outside });
        }
        if far >= INFINITY {
            return None;
        }
        in_solid_band(self.normal_at(ray.at(far)), width)
            .then(|| Intersection { distance: far, side: Side::Inside })
    }
}
