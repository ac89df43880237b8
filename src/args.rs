mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
};

use crate::geo_3d::Point;
use crate::io::CfgFormat;
use crate::tiles::{
    self,
    formats::FormatCliEnum,
};

// Re-export errors
pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Checkerboard floor tile generator for ray-tracer scene files.
#[derive(Debug, Parser)]
#[command(name = "tilegen", version, subcommand_negates_reqs = true, args_conflicts_with_subcommands = true)]
pub struct TileGenCli {
    #[command(subcommand)]
    pub sub_command: Option<SubCommand>,

    #[command(flatten)]
    pub tile_args: TileCli,

    #[command(flatten)]
    pub output_args: OutputCli,

    #[arg(short, long, global = true)]
    /// Log progress to stderr.
    pub verbose: bool,
}

/// Parser for the subcommands of the tilegen binary using clap.
#[derive(Debug, Subcommand)]
pub enum SubCommand {
    #[command(name = "from-config")]
    /// Generate from a config file (.yaml/.yml, .json or .toml) instead of positional arguments.
    FromConfig(ConfigCli),

    #[command(name = "example")]
    /// Print an example config file.
    Example(ExampleArgs),
}

/// Positional tile arguments. Compiled with clap.
/// All are required unless a subcommand is given.
#[derive(Debug, Args)]
pub struct TileCli {
    #[arg(value_name = "CORNER_X", required = true, allow_negative_numbers = true)]
    /// X coordinate of the floor corner.
    pub corner_x: Option<f64>,

    #[arg(value_name = "CORNER_Y", required = true, allow_negative_numbers = true)]
    /// Y coordinate of the floor (the floor height).
    pub corner_y: Option<f64>,

    #[arg(value_name = "CORNER_Z", required = true, allow_negative_numbers = true)]
    /// Z coordinate of the floor corner.
    pub corner_z: Option<f64>,

    #[arg(value_name = "TILE_SIZE", required = true, allow_negative_numbers = true)]
    /// Edge length of one tile.
    pub tile_size: Option<f64>,

    #[arg(value_name = "WIDTH", required = true)]
    /// Number of tiles along x.
    pub width: Option<u32>,

    #[arg(value_name = "DEPTH", required = true)]
    /// Number of tiles along z.
    pub depth: Option<u32>,

    #[arg(value_name = "COLOR0", required = true)]
    /// Color of the corner tile.
    pub color0: Option<String>,

    #[arg(value_name = "COLOR1", required = true)]
    /// Alternating color.
    pub color1: Option<String>,

    #[arg(value_name = "CEILING_HEIGHT", requires = "ceiling_color", allow_negative_numbers = true)]
    /// Y coordinate of the ceiling; adds four walls and a ceiling (0 for none).
    pub ceiling_height: Option<f64>,

    #[arg(value_name = "CEILING_COLOR")]
    /// Color of the walls and ceiling.
    pub ceiling_color: Option<String>,
}

/// Output arguments for positional runs. Compiled with clap.
#[derive(Debug, Args)]
pub struct OutputCli {
    #[arg(short, long, value_enum, default_value_t = FormatCliEnum::Scene)]
    /// Output format.
    pub format: FormatCliEnum,

    #[arg(short, long = "output")]
    /// Write to this file instead of stdout.
    pub output_path: Option<String>,

    #[arg(long)]
    /// Write the floor triangles without the enclosing container record.
    pub no_container: bool,
}

/// Compiled arguments for the from-config command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ConfigCli {
    #[arg(value_name = "CFG_FILE")]
    /// Path to the config file.
    pub cfg_file: String,
}

/// Compiled arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(value_enum, default_value_t = CfgFormat::Yaml)]
    /// Config file format to print.
    pub cfg_format: CfgFormat,

    #[arg(short, long, value_enum, default_value_t = FormatCliEnum::Scene)]
    /// Output format used in the example.
    pub format: FormatCliEnum,
}

impl TileCli {
    /// Construct the tile target from the positional arguments and the output options.
    pub fn reconstruct(self, output_args: OutputCli) -> ProcResult<tiles::TileTarget> {
        let ceiling = match (self.ceiling_height, self.ceiling_color) {
            (Some(height), Some(color)) => Some(tiles::Ceiling{height, color}),
            (None, None) => None,
            _ => return err_str("Ceiling height and ceiling color must be given together"),
        };

        let tile_args = tiles::TileArgs{
            tile_size: required(self.tile_size, "TILE_SIZE")?,
            width: required(self.width, "WIDTH")?,
            depth: required(self.depth, "DEPTH")?,
            colors: [required(self.color0, "COLOR0")?, required(self.color1, "COLOR1")?],
            container: !output_args.no_container,
            corner: Point::new(
                required(self.corner_x, "CORNER_X")?,
                required(self.corner_y, "CORNER_Y")?,
                required(self.corner_z, "CORNER_Z")?,
            ),
            ceiling,
        };

        let target = tiles::TileTarget{
            output_path: output_args.output_path,
            format: output_args.format.construct(),
            tiles: tile_args,
        };
        target.validate()?;
        Ok(target)
    }
}

/// Parse the command line arguments for the tilegen binary.
pub fn parse_cli_args() -> ProcResult<TileGenCli> {
    Ok(TileGenCli::try_parse()?)
}

/// Parse an explicit argument list (first item is the binary name).
pub fn parse_cli_args_from<I, T>(args: I) -> ProcResult<TileGenCli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Ok(TileGenCli::try_parse_from(args)?)
}

fn required<T>(value: Option<T>, name: &str) -> ProcResult<T> {
    match value {
        Some(value) => Ok(value),
        None => err_str(&format!("Missing argument <{}>", name)),
    }
}
