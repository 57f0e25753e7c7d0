use std::fs;
use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};

use sudoku_validator::config::Config;
use sudoku_validator::validation::validate;

fn main() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let raw = read_input(&config)?;
    log::debug!("read {} bytes of puzzle input", raw.len());

    // The core treats every line break as a row separator, so the trailing
    // newline most files end with would register as a tenth, empty row.
    // Stripping it is this wrapper's job, not the core's.
    let result = validate(raw.trim_end());

    if config.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.code());
    }

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_input(config: &Config) -> Result<String> {
    match &config.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read puzzle file {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read puzzle from stdin")?;
            Ok(raw)
        }
    }
}
