use hanmode_probe::InputModeProbe;
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn main() {
    // stdout carries only the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let probe = InputModeProbe::platform();
    let mode = probe.detect();

    tracing::debug!(%mode, "input mode detected");
    // Exit code stays 0 even when stdout is closed
    if let Err(e) = writeln!(std::io::stdout(), "{}", mode.display_line()) {
        tracing::warn!(error = %e, "failed to write result");
    }
}
