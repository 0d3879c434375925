//! # Settings
//!
//! The command line only picks the mode, the rest comes from the environment:
//! - `SYNC_ACTORS` - actors per role, 5 by default
//! - `SYNC_PAUSE_MS` - how long an actor thinks between the cycles, 2 seconds by default
//! - `SYNC_CYCLES` - stop after that many cycles per actor, runs forever if unset

use std::time::Duration;

use crate::error::Error;

pub const ACTORS_VAR: &str = "SYNC_ACTORS";
pub const PAUSE_VAR: &str = "SYNC_PAUSE_MS";
pub const CYCLES_VAR: &str = "SYNC_CYCLES";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub actors: usize,
    pub pause: Duration,
    pub cycles: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            actors: 5,
            pause: Duration::from_secs(2),
            cycles: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [Settings::from_env] with a custom source of variables
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let defaults = Self::default();

        let actors = match lookup(ACTORS_VAR) {
            Some(value) => parse(ACTORS_VAR, &value)?,
            None => defaults.actors,
        };
        // a table needs 2 forks at least, so 2 philosophers
        if actors < 2 {
            return Err(Error::InvalidSetting {
                name: ACTORS_VAR,
                value: actors.to_string(),
                reason: "at least 2 actors are needed".to_string(),
            });
        }

        let pause = match lookup(PAUSE_VAR) {
            Some(value) => Duration::from_millis(parse(PAUSE_VAR, &value)?),
            None => defaults.pause,
        };

        let cycles = match lookup(CYCLES_VAR) {
            Some(value) => Some(parse(CYCLES_VAR, &value)?),
            None => defaults.cycles,
        };

        Ok(Self {
            actors,
            pause,
            cycles,
        })
    }
}

fn parse<T>(name: &'static str, value: &str) -> Result<T, Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| Error::InvalidSetting {
            name,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
