use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::Deserialize;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::constants::EPSILON;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3(pub f32, pub f32, pub f32);

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point3(pub f32, pub f32, pub f32);

impl Vec3 {
    pub const ZERO: Vec3 = Vec3(0.0, 0.0, 0.0);

    /// Vector going from `p1` to `p2`.
    pub fn between(p1: Point3, p2: Point3) -> Self {
        Self(p2.0 - p1.0, p2.1 - p1.1, p2.2 - p1.2)
    }

    /// Each component drawn uniformly in [-1, 1]. Jitter and ad-hoc tests only.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let uniform = Uniform::new_inclusive(-1.0f32, 1.0);
        Self(uniform.sample(rng), uniform.sample(rng), uniform.sample(rng))
    }

    pub fn add(self, v: Self) -> Self { Self(self.0+v.0, self.1+v.1, self.2+v.2) }
    pub fn sub(self, v: Self) -> Self { Self(self.0-v.0, self.1-v.1, self.2-v.2) }
    pub fn scale(self, f: f32) -> Self { Self(self.0*f, self.1*f, self.2*f) }
    pub fn div(self, f: f32) -> Self { Self(self.0/f, self.1/f, self.2/f) }
    pub fn dot(self, v: Self) -> f32 { self.0*v.0 + self.1*v.1 + self.2*v.2 }
    pub fn cross(self, v: Self) -> Self {
        Self(self.1*v.2-self.2*v.1, self.2*v.0-self.0*v.2, self.0*v.1-self.1*v.0)
    }
    pub fn neg(self) -> Self { Self(-self.0,-self.1,-self.2) }

    pub fn norm2(self) -> f32 { self.dot(self) }
    pub fn norm(self) -> f32 { self.norm2().sqrt() }

    /// Tries to bring `self` to unit length.
    ///
    /// Returns `false` and leaves `self` untouched when the length is not above
    /// [`EPSILON`]: the direction is undefined.
    pub fn normalize(&mut self) -> bool {
        let norm = self.norm();
        if norm > EPSILON {
            *self = self.div(norm);
            true
        } else {
            false
        }
    }

    /// Unit copy of `self`, or `self` unchanged when it is too short to normalize.
    pub fn unit(mut self) -> Self {
        self.normalize();
        self
    }

    /// Mirror of `self` about the unit normal `n`: `2(n.v)n - v`.
    pub fn mirror(self, n: Vec3) -> Self {
        n.scale(2.0 * n.dot(self)).sub(self)
    }
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3(0.0, 0.0, 0.0);

    /// Vector from `self` to `other`.
    pub fn to(self, other: Point3) -> Vec3 { Vec3::between(self, other) }
    pub fn offset(self, v: Vec3) -> Self { Self(self.0+v.0, self.1+v.1, self.2+v.2) }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, v: Vec3) -> Vec3 { Vec3::add(self, v) }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, v: Vec3) -> Vec3 { Vec3::sub(self, v) }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, f: f32) -> Vec3 { self.scale(f) }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 { v.scale(self) }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    fn div(self, f: f32) -> Vec3 { Vec3::div(self, f) }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 { Vec3::neg(self) }
}

impl Add<Vec3> for Point3 {
    type Output = Point3;
    fn add(self, v: Vec3) -> Point3 { self.offset(v) }
}

impl Sub for Point3 {
    type Output = Vec3;
    fn sub(self, p: Point3) -> Vec3 { p.to(self) }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self { Vec3(a[0], a[1], a[2]) }
}

impl From<[f32; 3]> for Point3 {
    fn from(a: [f32; 3]) -> Self { Point3(a[0], a[1], a[2]) }
}

/* Custom helpers so Serde turns a JSON array into a Vec3 / Point3 */
pub fn vec3_from_array<'de, D>(d: D) -> Result<Vec3, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let arr = <[f32; 3]>::deserialize(d)?;
    Ok(arr.into())
}

pub fn point3_from_array<'de, D>(d: D) -> Result<Point3, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let arr = <[f32; 3]>::deserialize(d)?;
    Ok(arr.into())
}
