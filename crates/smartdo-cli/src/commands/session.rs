use chrono::Local;
use smartdo_core::{build_classifier, Config};
use tracing::info;

use crate::session::Session;

/// Run the interactive menu on stdin/stdout.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let classifier = build_classifier(&config.classifier)?;
    info!(classifier = %config.classifier.kind, "starting session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(
        stdin.lock(),
        stdout.lock(),
        classifier.as_ref(),
        Local::now().date_naive(),
        config.display,
    );
    session.run()?;
    Ok(())
}
