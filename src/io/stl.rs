use stl_io;

use crate::io;
use crate::geo_3d::{
    Point,
    GeoVector,
};

/// Write a set of triangles as binary STL.
/// Uses the external `stl_io` crate.
/// `path` only labels errors; `None` means the writer is stdout.
pub fn write_stl(writer: &mut dyn std::io::Write, triangles: &[stl_io::Triangle], path: Option<&str>) -> io::IoResult<()> {
    match stl_io::write_stl(&mut &mut *writer, triangles.iter()) {
        Ok(_) => Ok(()),
        Err(error) => {
            Err(io::IoError{file: path.map(str::to_string), cause: io::IoErrorType::File(error)})
        },
    }
}

/// Helper function for triangle construction.
/// The facet normal follows the winding order `v0 -> v1 -> v2`.
pub fn stl_triangle(v0: &Point, v1: &Point, v2: &Point) -> stl_io::Triangle {
    let normal: GeoVector = (v1 - v0).cross(&(v2 - v0)).normalize();
    stl_io::Triangle{
        normal: stl_io::Normal::new(normal.to_f32_array()),
        vertices: [
            stl_io::Vertex::new(v0.to_f32_array()),
            stl_io::Vertex::new(v1.to_f32_array()),
            stl_io::Vertex::new(v2.to_f32_array()),
        ]
    }
}
