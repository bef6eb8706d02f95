mod check;
mod cli;
mod env;
mod error;

use error::CheckError;
use log::warn;
use std::process::ExitCode;
use upcheck_common::env::Mode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();
    match cli.command {
        Some(cli::Commands::Check) | None => {
            let result = match env::init() {
                Ok(config) => {
                    upcheck_common::logger::init("upcheck:client", &config.mode);
                    check::run(&config).await
                }
                Err(err) => {
                    upcheck_common::logger::init("upcheck:client", &Mode::Production);
                    Err(CheckError::from(err))
                }
            };

            match &result {
                Ok(outcome) => println!("{}", outcome.report()),
                Err(err) => {
                    warn!("update check failed: {}", err);
                    eprintln!("update check failed: {}", err);
                }
            }

            ExitCode::from(check::exit_status(&result))
        }
        Some(cli::Commands::Version) => {
            println!("{}", env::version());
            ExitCode::SUCCESS
        }
    }
}
