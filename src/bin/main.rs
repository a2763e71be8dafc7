//! Runs every configured demo in order.
//!
//! Set `OOP_INTRO_CONFIG` to a TOML file to pick demos or turn off color.
//! Run with: cargo run --bin oop-intro

use oop_intro::{runner, DemoConfig};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let result = DemoConfig::from_env().and_then(|config| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        runner::run_plan(&config, &mut out)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
