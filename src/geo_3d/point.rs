use std::ops::Sub;
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_3d::GeoVector;

/// A point in 3D space.
/// Contains the coordinates of the point.
/// Subtracting two points gives the vector between them.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point{x, y, z}
    }

    /// Create a new zero point.
    pub fn zero() -> Self {
        Point{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Check that every coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Copy of this point with the x coordinate replaced.
    pub fn with_x(&self, x: f64) -> Point {
        Point{x, ..*self}
    }

    /// Copy of this point with the y coordinate replaced.
    pub fn with_y(&self, y: f64) -> Point {
        Point{y, ..*self}
    }

    /// Copy of this point with the z coordinate replaced.
    pub fn with_z(&self, z: f64) -> Point {
        Point{z, ..*self}
    }

    /// Single-precision coordinates, as used by STL vertices.
    pub fn to_f32_array(&self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}
impl Sub<&Point> for &Point {
    type Output = GeoVector;

    fn sub(self, rhs: &Point) -> GeoVector {
        GeoVector{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
