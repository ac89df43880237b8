/*!
 * This is the output formats module.
 * Adding new formats should be done here.
 *
 * New formats need:
 * - A struct implementing `OutputFormatTrait`
 * - An enum variant containing that struct in `FormatEnum`
 * - A CLI name in `FormatCliEnum` and its handling in `FormatCliEnum::construct`
 *
 */

use enum_dispatch::enum_dispatch;
use serde::{Serialize, Deserialize};
use strum::EnumIter;

use crate::tiles;

//
// ------------------------------------------------------------
// Code that requires modification to add a new output format
//      |
//      V
//

// Source files for the output formats
mod scene_text;
mod stl_mesh;
mod json_records;

/// Output formats enum.
/// To add a new format:
/// include it here and in `FormatCliEnum`,
/// and implement the `OutputFormatTrait` trait for it.
#[derive(Debug, Clone, Serialize, Deserialize, EnumIter)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[enum_dispatch(OutputFormatTrait)]
pub enum FormatEnum {
    /// Ray-tracer scene description text.
    SceneText(scene_text::Format),
    /// Binary STL mesh of all triangles.
    Stl(stl_mesh::Format),
    /// JSON dump of the generated records.
    Json(json_records::Format),
}
impl Default for FormatEnum {
    fn default() -> Self {
        FormatEnum::SceneText(scene_text::Format::default())
    }
}

/// Output formats CLI enum.
/// Add a new format here to add it to the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[clap(rename_all = "kebab_case")]
pub enum FormatCliEnum {
    /// Ray-tracer scene description text.
    Scene,
    /// Binary STL mesh (colors are dropped).
    Stl,
    /// JSON dump of the generated records.
    Json,
}
impl FormatCliEnum {
    /// Construct an output format with default settings from the CLI enum.
    pub fn construct(&self) -> FormatEnum {
        match self {
            FormatCliEnum::Scene => FormatEnum::SceneText(scene_text::Format::default()),
            FormatCliEnum::Stl => FormatEnum::Stl(stl_mesh::Format::default()),
            FormatCliEnum::Json => FormatEnum::Json(json_records::Format::default()),
        }
    }
}

//
// ------------------------------------------------------------
// Traits that don't need modification,
// but are references for adding a new output format
//      |
//      V
//

/// Output format trait.
/// This trait defines the functions that all output formats must implement.
#[enum_dispatch]
pub trait OutputFormatTrait {
    /// Get the name of the output format.
    fn get_format_name(&self) -> &'static str;

    /// Get the file extension an output path must have, if the format requires one.
    fn get_output_extension(&self) -> Option<&'static str>;

    /// Binary formats are not written to a terminal.
    fn is_binary(&self) -> bool;

    /// Write the scene to the writer.
    fn write_scene(&self, scene: &tiles::Scene, writer: &mut dyn std::io::Write) -> tiles::ProcResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_format_has_a_cli_name() {
        for format in FormatEnum::iter() {
            let name = format.get_format_name();
            let from_cli = match format {
                FormatEnum::SceneText(_) => FormatCliEnum::Scene,
                FormatEnum::Stl(_) => FormatCliEnum::Stl,
                FormatEnum::Json(_) => FormatCliEnum::Json,
            };
            assert_eq!(from_cli.construct().get_format_name(), name);
        }
    }

    #[test]
    fn default_format_is_scene_text() {
        assert!(matches!(FormatEnum::default(), FormatEnum::SceneText(_)));
    }
}
