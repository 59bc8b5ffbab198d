mod cli;
mod cmd;
mod error;
mod io;
mod logging;
mod prompt;

use clap::Parser;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Path {
            file,
            from,
            to,
            delimiter,
        } => {
            let query = prompt::resolve_query(
                &mut std::io::stdin().lock(),
                &mut std::io::stderr(),
                file,
                from,
                to,
            )?;
            let content = io::read_input(&query.file, cli.max_file_size)?;
            cmd::path::run(
                &content,
                &query.file.label(),
                &query.from,
                &query.to,
                delimiter,
                &cli.format,
            )
        }
        Command::Inspect { file, delimiter } => {
            let content = io::read_input(&file, cli.max_file_size)?;
            cmd::inspect::run(&content, &file.label(), delimiter, &cli.format)
        }
    }
}
