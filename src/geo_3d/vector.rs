use serde::{Serialize, Deserialize};

/// A vector in 3D space.
/// Used for facet normals.
#[derive(Debug, Clone, Copy)]
#[derive(Serialize, Deserialize)]
pub struct GeoVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl GeoVector {
    /// Normalize and return a new vector.
    /// A zero vector has no direction and is returned unchanged.
    pub fn normalize(&self) -> Self {
        let mag = self.norm();
        if mag == 0.0 {
            return *self;
        }
        GeoVector{
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Get the cross product of two vectors.
    pub fn cross(&self, other: &GeoVector) -> GeoVector {
        GeoVector{
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Single-precision components, as used by STL normals.
    pub fn to_f32_array(&self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}
