//! # Lightswitch
//!
//! The first one to enter the room turns the light on, the last one to leave turns it off.
//!
//! "The light" is some other semaphore (the room) passed to [Lightswitch::lock] and [Lightswitch::unlock].
//! It's held for as long as there's at least one member of the group inside,
//! no matter how many of them are there. That's how a whole crowd of readers shares a single exclusive lock.
//!
//! The occupancy counter is a plain integer behind an internal semaphore of 1.
//! The 0 -> 1 and 1 -> 0 transitions happen while that semaphore is held, so
//! the room is taken exactly once per "light on" and given back exactly once per "light off".
//!
//! Note that the first entrant may block on the room while holding the internal lock.
//! Everybody else from the group queues up behind it, which is what we want: they can't get in anyway.

use std::cell::UnsafeCell;

use super::p1_semaphore::Semaphore;

pub struct Lightswitch {
    /// how many members of the group are inside, guarded by `mutex`
    counter: UnsafeCell<u32>,
    mutex: Semaphore,
}

/// The counter is only touched with the `mutex` acquired.
/// Acquire/Release of the semaphore gives the happens-before between the owners.
unsafe impl Sync for Lightswitch {}

impl Lightswitch {
    pub const fn new() -> Self {
        Self {
            counter: UnsafeCell::new(0),
            mutex: Semaphore::new(1),
        }
    }

    pub fn lock(&self, room: &Semaphore) {
        self.mutex.acquire();
        // SAFETY: the mutex is held
        let counter = unsafe { &mut *self.counter.get() };
        *counter += 1;
        if *counter == 1 {
            tracing::trace!("lightswitch on");
            room.acquire();
        }
        self.mutex.release();
    }

    pub fn unlock(&self, room: &Semaphore) {
        self.mutex.acquire();
        // SAFETY: the mutex is held
        let counter = unsafe { &mut *self.counter.get() };
        assert!(*counter > 0, "lightswitch unlocked more times than locked");
        *counter -= 1;
        if *counter == 0 {
            tracing::trace!("lightswitch off");
            room.release();
        }
        self.mutex.release();
    }

    /// How many are inside at the moment.
    pub fn occupancy(&self) -> u32 {
        self.mutex.acquire();
        // SAFETY: the mutex is held
        let occupancy = unsafe { *self.counter.get() };
        self.mutex.release();
        occupancy
    }
}

impl Default for Lightswitch {
    fn default() -> Self {
        Self::new()
    }
}
