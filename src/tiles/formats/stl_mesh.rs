use crate::{
    io,
    tiles,
};
use tiles::formats;

use log::info;
use serde::{Serialize, Deserialize};

/// STL mesh format struct.
/// Floor and walls go into one binary STL; color tokens are not kept.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Format {
    // No fields yet
}

impl formats::OutputFormatTrait for Format {
    /// Get the name of the output format.
    fn get_format_name(&self) -> &'static str {
        "STL Mesh"
    }

    fn get_output_extension(&self) -> Option<&'static str> {
        Some("stl")
    }

    fn is_binary(&self) -> bool {
        true
    }

    fn write_scene(&self, scene: &tiles::Scene, writer: &mut dyn std::io::Write) -> tiles::ProcResult<()> {
        let triangles = scene.triangles()
            .map(|tri| io::stl::stl_triangle(&tri.a, &tri.b, &tri.c))
            .collect::<Vec<_>>();

        info!("Writing {} STL facets...", triangles.len());
        io::stl::write_stl(writer, &triangles, None)?;
        Ok(())
    }
}
