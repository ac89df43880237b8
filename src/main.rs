fn main() {

    // 1. Parse commandline arguments
    let cli = match tilegen::args::parse_cli_args() {
        Ok(cli) => cli,
        Err(tilegen::args::ArgError::ClapError(err)) => {
            // Help and version go to stdout with success, everything else is a usage error
            if let Err(print_err) = err.print() {
                eprintln!("{}", print_err);
            }
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        },
        Err(err) => {
            eprintln!("{}", tilegen::TileGenError::from(err));
            std::process::exit(1);
        },
    };

    // 2. Logging goes to stderr, stdout is reserved for the scene
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    // 3. Generate and write the output
    if let Err(err) = tilegen::run(cli) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
