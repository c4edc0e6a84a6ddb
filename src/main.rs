//! Checks a saved form snapshot the same way the page does before submitting.
//!
//! Usage: `form-check <snapshot.json>`

use std::{env, fs::File, io::BufReader, process::ExitCode};

use anyhow::{Context, Result};
use log::{error, info};
use registration_form::form::StaticSnapshot;
use registration_form::{FormSubmissionError, FormValidator, ValidatorConfig};

fn run() -> Result<()> {
    let path = env::args()
        .nth(1)
        .context("Usage: form-check <snapshot.json>")?;

    let file = File::open(&path).with_context(|| format!("Failed to open {path}"))?;
    let snapshot: StaticSnapshot = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse form snapshot {path}"))?;

    let validator = FormValidator::new(ValidatorConfig::from_env());
    info!("Validating {} with {:?}", path, validator.config());

    let result = validator.validate(&snapshot);
    info!(
        "{} is {} ({} field error(s))",
        path,
        if result.is_valid() { "valid" } else { "invalid" },
        result.errors().len()
    );
    println!("{}", serde_json::to_string_pretty(&result)?);

    result.into_submission()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(rejected) = e.downcast_ref::<FormSubmissionError>() {
                for (field, message) in rejected.errors().iter() {
                    error!("{field}: {message}");
                }
            }
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
