use std::io::Write;

use crate::tiles;
use crate::geo_3d::Point;
use tiles::formats;

use serde::{Serialize, Deserialize};

/// Scene text format struct.
/// Writes one record per line, as read by the ray tracer.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Format {
    /// Indent the floor triangles inside the container block with a tab.
    #[serde(default = "Format::default_indent")]
    indent: bool,
    /// Write a `// Wall` comment before the wall triangles.
    #[serde(default = "Format::default_section_comments")]
    section_comments: bool,
}
impl Format {
    pub fn default_indent() -> bool {
        true
    }
    pub fn default_section_comments() -> bool {
        true
    }
}
impl Default for Format {
    fn default() -> Self {
        Format{
            indent: Format::default_indent(),
            section_comments: Format::default_section_comments(),
        }
    }
}

impl formats::OutputFormatTrait for Format {
    /// Get the name of the output format.
    fn get_format_name(&self) -> &'static str {
        "Scene Text"
    }

    fn get_output_extension(&self) -> Option<&'static str> {
        None
    }

    fn is_binary(&self) -> bool {
        false
    }

    /// Write the container, the floor and the walls, in that order.
    fn write_scene(&self, scene: &tiles::Scene, writer: &mut dyn Write) -> tiles::ProcResult<()> {
        match scene.container.as_ref() {
            Some(container) => {
                writeln!(writer, "{}", container_line(container))?;
                let prefix = if self.indent { "\t" } else { "" };
                for triangle in scene.floor.iter() {
                    writeln!(writer, "{}{}", prefix, triangle_line(triangle))?;
                }
                writeln!(writer, "}}")?;
            },
            None => {
                for triangle in scene.floor.iter() {
                    writeln!(writer, "{}", triangle_line(triangle))?;
                }
            },
        }

        if scene.walls.is_empty() {
            return Ok(());
        }
        if self.section_comments {
            write!(writer, "\n\n// Wall\n\n")?;
        }
        for triangle in scene.walls.iter() {
            writeln!(writer, "{}", triangle_line(triangle))?;
        }
        Ok(())
    }
}

/// Coordinates as `x y z` in fixed notation.
fn coords(point: &Point) -> String {
    format!("{:.6} {:.6} {:.6}", point.x, point.y, point.z)
}

fn triangle_line(triangle: &tiles::Triangle) -> String {
    format!(
        "triangle a {} b {} c {} color {} reflectiveness {}",
        coords(&triangle.a), coords(&triangle.b), coords(&triangle.c),
        triangle.color, triangle.reflectiveness,
    )
}

/// Opening line of a container block; the caller closes it with `}`.
fn container_line(container: &tiles::Container) -> String {
    format!(
        "container a {} b {} c {} d {} {{",
        coords(&container.a), coords(&container.b), coords(&container.c), coords(&container.d),
    )
}
