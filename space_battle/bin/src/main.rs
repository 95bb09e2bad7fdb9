use clap::Parser;
use space_battle_cli::{run, Args};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let fleet = match run(&args) {
        Ok(fleet) => fleet,
        Err(err) => {
            log::error!("Error loading scenario {}: {}", args.scenario.display(), err);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(fleet.ships()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Error serializing fleet: {}", err);
            ExitCode::FAILURE
        }
    }
}
