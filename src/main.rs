use std::env::args;
use std::io::Write;

use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

use sync_patterns::{driver, Error, Mode, Settings};

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    start().map_err(|e| {
        tracing::error!(error = %e, "giving up");
        e.to_string()
    })
}

fn start() -> Result<(), Error> {
    let mode = select_mode(args().skip(1).collect())?;
    let settings = Settings::from_env()?;
    tracing::info!(%mode, ?settings, "starting");

    driver::run(mode.coordinator(settings.actors), &settings, |actor| {
        // one line at a time, the lock keeps them from interleaving mid-line
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{}", actor.announce());
        let _ = out.flush();
    })?;
    Ok(())
}

fn select_mode(args: Vec<String>) -> Result<Mode, Error> {
    match args.as_slice() {
        [] => Err(Error::MissingMode(
            Mode::iter()
                .map(|m| format!("{} ({m})", m.number()))
                .collect::<Vec<String>>()
                .join(", "),
        )),
        [selector] => Mode::parse(selector),
        more => Err(Error::TooManyArguments(more.len())),
    }
}
