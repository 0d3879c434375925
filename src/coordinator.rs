//! # Coordinators
//!
//! A coordinator is one of the protocols: it knows which actors it serves and
//! how each of them gets in and out. The driver doesn't care which one it runs,
//! it just calls [Coordinator::enter], does the action and calls [Coordinator::exit].

use std::{fmt, sync::Arc};

use strum_macros::{Display, EnumIter, FromRepr};

use crate::{
    dining::{p1_footman::FootmanTable, p2_parity::ParityTable},
    error::Error,
    readers_writers::{p1_turnstile::TurnstileRoom, p2_no_starvation::NoStarvationRoom},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Role {
    Reader,
    Writer,
    Philosopher,
}

impl Role {
    /// What the actor does once it's in
    pub fn action(self) -> &'static str {
        match self {
            Role::Reader => "Reading",
            Role::Writer => "Writing",
            Role::Philosopher => "Eating",
        }
    }
}

/// Actors are numbered from 1 within their role
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Actor {
    pub role: Role,
    pub id: usize,
}

impl Actor {
    pub fn new(role: Role, id: usize) -> Self {
        Self { role, id }
    }

    /// zero-based position, e.g. the seat at the table
    pub fn seat(&self) -> usize {
        self.id - 1
    }

    /// The log line of the action, e.g. `Reader 3: Reading.`
    pub fn announce(&self) -> String {
        format!("{self}: {}.", self.role.action())
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.role, self.id)
    }
}

pub trait Coordinator: Send + Sync {
    /// Everybody this coordinator is wired for
    fn actors(&self) -> Vec<Actor>;

    /// Entry protocol, blocks until the actor may act.
    ///
    /// # Panics
    /// - if the role isn't served by the coordinator
    fn enter(&self, actor: Actor);

    /// Exit protocol, it's only valid after a matching [Coordinator::enter]
    fn exit(&self, actor: Actor);

    /// Something to report once a bounded run is over
    fn summary(&self) -> Option<String> {
        None
    }
}

/// `n` actors of each of the roles, ids starting at 1
pub(crate) fn cast(roles: &[Role], n: usize) -> Vec<Actor> {
    roles
        .iter()
        .flat_map(|&role| (1..=n).map(move |id| Actor::new(role, id)))
        .collect()
}

/// The four protocols, selected by their number on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, Display, FromRepr)]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum Mode {
    TurnstileReadersWriters = 1,
    NoStarvationReadersWriters = 2,
    FootmanDining = 3,
    ParityDining = 4,
}

impl Mode {
    pub fn parse(selector: &str) -> Result<Self, Error> {
        let number: i64 = selector
            .trim()
            .parse()
            .map_err(|_| Error::NotAMode(selector.to_string()))?;
        u8::try_from(number)
            .ok()
            .and_then(Mode::from_repr)
            .ok_or(Error::UnknownMode(number))
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Wires up the protocol for `actors` readers and `actors` writers,
    /// or for a table of `actors` philosophers.
    pub fn coordinator(self, actors: usize) -> Arc<dyn Coordinator> {
        match self {
            Mode::TurnstileReadersWriters => Arc::new(TurnstileRoom::new(actors)),
            Mode::NoStarvationReadersWriters => Arc::new(NoStarvationRoom::new(actors)),
            Mode::FootmanDining => Arc::new(FootmanTable::new(actors)),
            Mode::ParityDining => Arc::new(ParityTable::new(actors)),
        }
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(Mode::parse("1").unwrap(), Mode::TurnstileReadersWriters);
        assert_eq!(Mode::parse("4").unwrap(), Mode::ParityDining);
        assert!(matches!(Mode::parse("5"), Err(Error::UnknownMode(5))));
        assert!(matches!(Mode::parse("0"), Err(Error::UnknownMode(0))));
        assert!(matches!(Mode::parse("-1"), Err(Error::UnknownMode(-1))));
        assert!(matches!(Mode::parse("300"), Err(Error::UnknownMode(300))));
        assert!(matches!(Mode::parse("two"), Err(Error::NotAMode(_))));
        assert!(matches!(Mode::parse(""), Err(Error::NotAMode(_))));
    }

    #[test]
    fn test_modes_are_numbered_in_order() {
        let numbers: Vec<u8> = Mode::iter().map(Mode::number).collect();
        assert_eq!(numbers, [1, 2, 3, 4]);
        assert_eq!(Mode::FootmanDining.to_string(), "footman-dining");
    }

    #[test]
    fn test_cast() {
        let rw = Mode::TurnstileReadersWriters.coordinator(3).actors();
        assert_eq!(rw.len(), 6);
        assert_eq!(rw[0], Actor::new(Role::Reader, 1));
        assert_eq!(rw[5], Actor::new(Role::Writer, 3));

        let table = Mode::ParityDining.coordinator(5).actors();
        assert!(table.iter().all(|a| a.role == Role::Philosopher));
        assert_eq!(table.last().unwrap().seat(), 4);
    }

    #[test]
    fn test_announce() {
        assert_eq!(Actor::new(Role::Reader, 3).announce(), "Reader 3: Reading.");
        assert_eq!(
            Actor::new(Role::Philosopher, 2).announce(),
            "Philosopher 2: Eating."
        );
    }
}
