use std::process::ExitCode;

use clap::Parser;

use salesdash_cli::Cli;

fn main() -> ExitCode {
    salesdash_observability::init();

    let cli = Cli::parse();

    match salesdash_cli::run(cli) {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: failed to render output: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            tracing::error!("dashboard command failed: {e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
