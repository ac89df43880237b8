use crate::args;
use crate::geo_3d::Point;
use crate::tiles::{
    FormatEnum,
    OutputFormatTrait,
};
use log::info;
use serde::{Serialize, Deserialize};

/// Ceiling (and wall) parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ceiling {
    /// Absolute y coordinate of the ceiling. Zero disables the walls.
    #[serde(alias = "ceiling_height")]
    pub height: f64,
    /// Color token for the walls and the ceiling.
    #[serde(alias = "ceiling_color")]
    pub color: String,
}

/// Geometric arguments for the tile generator.
/// Scalars come before the nested tables so the struct serializes cleanly to TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TileArgs {
    /// Edge length of a single square tile.
    #[serde(alias = "size", alias = "cell_size")]
    pub tile_size: f64,

    /// Number of tiles along x.
    pub width: u32,

    /// Number of tiles along z.
    pub depth: u32,

    /// The two alternating color tokens. Cell (0, 0) takes the first one.
    pub colors: [String; 2],

    /// Wrap the floor triangles in a container record.
    #[serde(default = "TileArgs::default_container")]
    pub container: bool,

    /// Corner of the floor with the lowest x and z.
    #[serde(alias = "origin")]
    pub corner: Point,

    /// Optional walls and ceiling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling: Option<Ceiling>,
}
impl TileArgs {
    pub fn default_container() -> bool {
        true
    }

    /// Small room used for example configs.
    pub fn example() -> Self {
        TileArgs{
            tile_size: 1.0,
            width: 8,
            depth: 8,
            colors: ["black".to_string(), "white".to_string()],
            container: Self::default_container(),
            corner: Point::new(-4.0, 0.0, -4.0),
            ceiling: Some(Ceiling{height: 5.0, color: "grey".to_string()}),
        }
    }

    /// Far x and z coordinates of the floor.
    pub fn extent(&self) -> (f64, f64) {
        (
            self.corner.x + self.width as f64 * self.tile_size,
            self.corner.z + self.depth as f64 * self.tile_size,
        )
    }

    /// Check the numeric arguments before any generation happens.
    pub fn validate(&self) -> args::ProcResult<()> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            args::err_str(&format!("Tile size must be a positive finite number, got {}", self.tile_size))?;
        }
        if !self.corner.is_finite() {
            args::err_str(&format!("Corner coordinates must be finite, got {}", self.corner))?;
        }
        if let Some(ceiling) = self.ceiling.as_ref() {
            if !ceiling.height.is_finite() {
                args::err_str(&format!("Ceiling height must be finite, got {}", ceiling.height))?;
            }
        }
        Ok(())
    }
}

/// Tile target struct.
/// Contains the output settings and the tile arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TileTarget {
    /// Output path; stdout when not set.
    #[serde(default, alias = "output", alias = "out", alias = "o", skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,

    /// Output format and its settings.
    #[serde(default)]
    pub format: FormatEnum,

    /// Tile arguments.
    pub tiles: TileArgs,
}
impl TileTarget {
    /// Construct a tile target from a config file.
    pub fn from_cfg_file(cfg_file: &str) -> args::ProcResult<Self> {
        let target: TileTarget = crate::io::read_cfg_file(cfg_file)?;
        target.validate()?;
        Ok(target)
    }

    /// Check the tile arguments and that the output path fits the format.
    pub fn validate(&self) -> args::ProcResult<()> {
        self.tiles.validate()?;

        if let (Some(output_path), Some(extension)) = (self.output_path.as_ref(), self.format.get_output_extension()) {
            if !output_path.ends_with(&format!(".{}", extension)) {
                args::err_str(&format!("{} output path must end with .{}, got {}", self.format.get_format_name(), extension, output_path))?;
            }
        }

        match self.output_path.as_ref() {
            Some(output_path) => info!("Writing {} output to {}", self.format.get_format_name(), output_path),
            None => info!("Writing {} output to stdout", self.format.get_format_name()),
        }
        Ok(())
    }
}
