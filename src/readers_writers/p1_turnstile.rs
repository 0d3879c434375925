//! # Readers and writers with a turnstile
//!
//! A writer holds the turnstile while it waits for the room, so
//! readers arriving after it get stuck in the turnstile and can't keep the room busy forever.
//! Readers already past the turnstile finish as usual, the last one out lets the writer in.
//!
//! Readers only pass through the turnstile (acquire then immediately release), they don't hold it.
//!
//! It's not a FIFO: once the writer releases the turnstile it's anybody's game.

use crate::{
    coordinator::{cast, Actor, Coordinator, Role},
    primitives::{Lightswitch, Semaphore},
};

pub struct TurnstileRoom {
    turnstile: Semaphore,
    room_empty: Semaphore,
    read_switch: Lightswitch,
    actors: usize,
}

impl TurnstileRoom {
    pub fn new(actors: usize) -> Self {
        Self {
            turnstile: Semaphore::new(1),
            room_empty: Semaphore::new(1),
            read_switch: Lightswitch::new(),
            actors,
        }
    }
}

impl Coordinator for TurnstileRoom {
    fn actors(&self) -> Vec<Actor> {
        cast(&[Role::Reader, Role::Writer], self.actors)
    }

    fn enter(&self, actor: Actor) {
        tracing::trace!(role = %actor.role, id = actor.id, "entering");
        match actor.role {
            Role::Reader => {
                self.turnstile.acquire();
                self.turnstile.release();
                self.read_switch.lock(&self.room_empty);
            }
            Role::Writer => {
                self.turnstile.acquire();
                self.room_empty.acquire();
            }
            Role::Philosopher => panic!("no philosophers in the reading room"),
        }
    }

    fn exit(&self, actor: Actor) {
        tracing::trace!(role = %actor.role, id = actor.id, "leaving");
        match actor.role {
            Role::Reader => self.read_switch.unlock(&self.room_empty),
            Role::Writer => {
                self.turnstile.release();
                self.room_empty.release();
            }
            Role::Philosopher => panic!("no philosophers in the reading room"),
        }
    }
}
