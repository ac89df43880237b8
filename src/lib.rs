pub mod args;
pub mod io;
pub mod geo_3d;
pub mod tiles;
mod crate_errors;

use std::io::{
    BufWriter,
    IsTerminal,
    Write,
};
use log::info;

pub use crate_errors::{
    TileGenError,
    TileGenResult,
    err_str,
};

use tiles::OutputFormatTrait;

/// Run whatever the command line asked for:
/// print an example config, generate from a config file, or generate from the positional arguments.
pub fn run(cli: args::TileGenCli) -> TileGenResult<()> {
    match cli.sub_command {
        Some(args::SubCommand::Example(example_args)) => {
            println!("{}", example_config(&example_args)?.trim_end());
            Ok(())
        },
        Some(args::SubCommand::FromConfig(cfg_args)) => {
            info!("Loading tile config file: {}...", cfg_args.cfg_file);
            let target = tiles::TileTarget::from_cfg_file(&cfg_args.cfg_file)?;
            run_target(&target)
        },
        None => {
            let target = cli.tile_args.reconstruct(cli.output_args)?;
            run_target(&target)
        },
    }
}

/// Generate the scene for a target and write it to the output file or stdout.
pub fn run_target(target: &tiles::TileTarget) -> TileGenResult<()> {
    let scene = tiles::build_scene(&target.tiles)?;

    match target.output_path.as_ref() {
        Some(output_path) => {
            let file = io::create(output_path).map_err(tiles::TileError::from)?;
            let mut writer = BufWriter::new(file);
            write_scene(&target.format, &scene, &mut writer)?;
            info!("Saved {} triangles to {}", scene.triangle_count(), output_path);
        },
        None => {
            let stdout = std::io::stdout();
            if target.format.is_binary() && stdout.is_terminal() {
                return err_str(&format!("Not writing binary {} output to a terminal, use --output or a redirect", target.format.get_format_name()));
            }
            let mut writer = BufWriter::new(stdout.lock());
            write_scene(&target.format, &scene, &mut writer)?;
        },
    }
    Ok(())
}

/// Build the example config text for the `example` subcommand.
pub fn example_config(example_args: &args::ExampleArgs) -> TileGenResult<String> {
    let format = example_args.format.construct();
    let target = tiles::TileTarget{
        output_path: format.get_output_extension().map(|extension| format!("floor.{}", extension)),
        format,
        tiles: tiles::TileArgs::example(),
    };
    Ok(io::cfg_to_string(&target, example_args.cfg_format).map_err(args::ArgError::from)?)
}

fn write_scene(format: &tiles::FormatEnum, scene: &tiles::Scene, writer: &mut dyn Write) -> tiles::ProcResult<()> {
    format.write_scene(scene, writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::CfgFormat;
    use crate::tiles::formats::FormatCliEnum;

    /// Example configs must load back through `from-config`.
    #[test]
    fn example_configs_reload() {
        for cfg_format in [CfgFormat::Yaml, CfgFormat::Json, CfgFormat::Toml] {
            for format in [FormatCliEnum::Scene, FormatCliEnum::Stl, FormatCliEnum::Json] {
                let example_args = args::ExampleArgs{cfg_format, format};
                let cfg_string = example_config(&example_args).unwrap();

                let suffix = match cfg_format {
                    CfgFormat::Yaml => ".yaml",
                    CfgFormat::Json => ".json",
                    CfgFormat::Toml => ".toml",
                };
                let mut cfg_file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
                cfg_file.write_all(cfg_string.as_bytes()).unwrap();
                cfg_file.flush().unwrap();

                let path = cfg_file.path().to_str().unwrap();
                let target = tiles::TileTarget::from_cfg_file(path).unwrap();
                assert_eq!(target.tiles, tiles::TileArgs::example());
                assert_eq!(target.format.get_format_name(), format.construct().get_format_name());
            }
        }
    }

    #[test]
    fn run_target_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("room.json");
        let target = tiles::TileTarget{
            output_path: Some(output_path.to_str().unwrap().to_string()),
            format: FormatCliEnum::Json.construct(),
            tiles: tiles::TileArgs::example(),
        };
        run_target(&target).unwrap();

        let written = std::fs::read_to_string(&output_path).unwrap();
        let scene: tiles::Scene = serde_json::from_str(&written).unwrap();
        assert_eq!(scene.triangle_count(), 2 * 8 * 8 + 10);
    }

    #[test]
    fn run_target_bad_directory() {
        let target = tiles::TileTarget{
            output_path: Some("no/such/dir/floor.stl".to_string()),
            format: FormatCliEnum::Stl.construct(),
            tiles: tiles::TileArgs::example(),
        };
        assert!(matches!(run_target(&target), Err(TileGenError::TileError(tiles::TileError::IoError(_)))));
    }
}
