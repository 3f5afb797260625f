use crate::error::Error;
use ordered_float::NotNan;
use std::ops::{Mul, Sub};

const EPSILON: f32 = 1e-9;

fn finite(value: f32) -> Result<f32, Error> {
    let value = NotNan::new(value).map_err(|e| Error::ConstructNotNan(e, value))?;
    if value.is_finite() {
        Ok(value.into_inner())
    } else {
        Err(Error::NonFiniteCoordinate(value.into_inner()))
    }
}

/// A point (or vector) in normalized image/model space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    x: f32,
    y: f32,
    z: f32,
}

impl Point3 {
    /// Rejects NaN and infinite coordinates.
    pub fn new(x: f32, y: f32, z: f32) -> Result<Self, Error> {
        Ok(Self {
            x: finite(x)?,
            y: finite(y)?,
            z: finite(z)?,
        })
    }

    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn z(self) -> f32 {
        self.z
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn norm(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn distance(self, other: Self) -> f32 {
        (other - self).norm()
    }

    /// Unit vector in the direction of `self`, or the zero vector when `self`
    /// has (near) zero length or its length overflows.
    pub fn normalize(self) -> Self {
        let norm = self.norm();
        if norm < EPSILON || !norm.is_finite() {
            Self::zero()
        } else {
            self * norm.recip()
        }
    }

    /// Angle between two vectors in degrees, in `[0, 180]`.
    ///
    /// A zero-length operand yields `0.0`.
    pub fn angle_between(self, other: Self) -> f32 {
        let magnitudes = self.norm() * other.norm();
        if magnitudes < EPSILON {
            return 0.0;
        }
        (self.dot(other) / magnitudes)
            .clamp(-1.0, 1.0)
            .acos()
            .to_degrees()
    }
}

/// `Point3` from `a` to `b`, i.e. `b - a`.
#[inline]
pub fn vector(a: Point3, b: Point3) -> Point3 {
    b - a
}

impl Sub for Point3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f32> for Point3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::Output {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
