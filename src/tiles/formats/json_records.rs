use std::io::Write;

use crate::tiles;
use tiles::formats;

use serde::{Serialize, Deserialize};

/// JSON records format struct.
/// Dumps the `Scene` as it was generated.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Format {
    #[serde(default = "Format::default_pretty")]
    pretty: bool,
}
impl Format {
    pub fn default_pretty() -> bool {
        true
    }
}
impl Default for Format {
    fn default() -> Self {
        Format{
            pretty: Format::default_pretty(),
        }
    }
}

impl formats::OutputFormatTrait for Format {
    /// Get the name of the output format.
    fn get_format_name(&self) -> &'static str {
        "JSON Records"
    }

    fn get_output_extension(&self) -> Option<&'static str> {
        Some("json")
    }

    fn is_binary(&self) -> bool {
        false
    }

    fn write_scene(&self, scene: &tiles::Scene, writer: &mut dyn Write) -> tiles::ProcResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, scene)?;
        } else {
            serde_json::to_writer(&mut *writer, scene)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
