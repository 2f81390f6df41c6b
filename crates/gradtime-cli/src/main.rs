use std::io::{self, Write};

use anyhow::Result;
use log::LevelFilter;

use gradtime_classifiers::loader::{ModelCache, DEFAULT_MODEL_PATH};
use gradtime_classifiers::predictor::predict_outcome;
use gradtime_cli::form::prompt_record;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(
            "GRADTIME_LOG",
            "error,gradtime_classifiers=info,gradtime_cli=info",
        ))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Graduation Timing Predictor")?;
    writeln!(
        out,
        "Predicts whether a student will graduate \"On Time\" or \"Late\" from a few factors."
    )?;
    writeln!(out)?;

    // The model is a hard dependency of the form: without it there is
    // nothing to submit to, so the form is never shown.
    let cache = ModelCache::new(DEFAULT_MODEL_PATH);
    let classifier = match cache.get() {
        Ok(classifier) => classifier,
        Err(e) => {
            writeln!(out, "Warning: {}", e)?;
            writeln!(out, "The model is not loaded. Check the model file and try again.")?;
            return Ok(());
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while let Some(record) = prompt_record(&mut input, &mut out)? {
        match predict_outcome(classifier.as_ref(), &record) {
            Ok(outcome) => {
                writeln!(out)?;
                writeln!(out, "Predicted graduation timing: {}", outcome)?;
            }
            Err(e) => {
                writeln!(out)?;
                writeln!(out, "Error: {}", e)?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}
