//! # Readers and writers, nobody starves
//!
//! Each group has a lightswitch over the other group's "no entry" semaphore:
//! - the first writer in takes `no_readers`, so new readers can't start
//! - the first reader in takes `no_writers`, so writers wait for the reading to end
//!
//! A reader holds `no_readers` only for the time of its lightswitch lock, so
//! a waiting writer gets in as soon as the readers already inside are done.
//! Writers give `no_readers` back once the last of them leaves.
//!
//! Writers still need `no_writers` one by one, as writing is exclusive.

use crate::{
    coordinator::{cast, Actor, Coordinator, Role},
    primitives::{Lightswitch, Semaphore},
};

pub struct NoStarvationRoom {
    no_readers: Semaphore,
    no_writers: Semaphore,
    read_switch: Lightswitch,
    write_switch: Lightswitch,
    actors: usize,
}

impl NoStarvationRoom {
    pub fn new(actors: usize) -> Self {
        Self {
            no_readers: Semaphore::new(1),
            no_writers: Semaphore::new(1),
            read_switch: Lightswitch::new(),
            write_switch: Lightswitch::new(),
            actors,
        }
    }
}

impl Coordinator for NoStarvationRoom {
    fn actors(&self) -> Vec<Actor> {
        cast(&[Role::Reader, Role::Writer], self.actors)
    }

    fn enter(&self, actor: Actor) {
        tracing::trace!(role = %actor.role, id = actor.id, "entering");
        match actor.role {
            Role::Reader => {
                self.no_readers.acquire();
                self.read_switch.lock(&self.no_writers);
                self.no_readers.release();
            }
            Role::Writer => {
                self.write_switch.lock(&self.no_readers);
                self.no_writers.acquire();
            }
            Role::Philosopher => panic!("no philosophers in the reading room"),
        }
    }

    fn exit(&self, actor: Actor) {
        tracing::trace!(role = %actor.role, id = actor.id, "leaving");
        match actor.role {
            Role::Reader => self.read_switch.unlock(&self.no_writers),
            Role::Writer => {
                self.no_writers.release();
                self.write_switch.unlock(&self.no_readers);
            }
            Role::Philosopher => panic!("no philosophers in the reading room"),
        }
    }
}
