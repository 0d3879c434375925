//! # Counting semaphore
//!
//! A single u32 is the whole state: it's the number of permits left.
//! [Semaphore::acquire] takes one permit, blocking while there are none.
//! [Semaphore::release] puts one back and wakes a single sleeper.
//!
//! It's the same wait & wake trick as the futex-based mutex: the sleeping is just there to spare cycles,
//! the correctness is on the atomic alone.
//!
//! ## No lost wake-ups
//! `wait(&count, 0)` only goes to sleep if the count is _still_ 0 when the kernel checks it.
//! So if a release sneaks in between our load and the wait, we simply don't sleep.
//!
//! ## No lost permits
//! Permits are only taken with a compare-and-exchange from a non-zero value.
//! A woken thread may lose the race to a fresh acquirer - it then sees 0 and goes back to sleep,
//! which is fine as the permit went to somebody.
//!
//! There's no ordering among the waiters: whoever wins the CAS gets the permit.
//! Fairness, if any, comes from the protocols built on top.

use std::sync::atomic::{
    AtomicU32,
    Ordering::{Acquire, Relaxed, Release},
};

use atomic_wait::{wait, wake_one};

pub struct Semaphore {
    /// number of permits available right now
    count: AtomicU32,
}

impl Semaphore {
    pub const fn new(permits: u32) -> Self {
        Self {
            count: AtomicU32::new(permits),
        }
    }

    /// Takes a permit, sleeping until there's one.
    pub fn acquire(&self) {
        let mut current = self.count.load(Relaxed);
        loop {
            if current == 0 {
                wait(&self.count, 0);
                current = self.count.load(Relaxed);
                continue;
            }
            // Acquire pairs with the Release in `release`
            match self
                .count
                .compare_exchange_weak(current, current - 1, Acquire, Relaxed)
            {
                Ok(_) => return,
                Err(seen) => current = seen,
            }
        }
    }

    /// Takes a permit if there's one, never blocks.
    pub fn try_acquire(&self) -> bool {
        let mut current = self.count.load(Relaxed);
        while current > 0 {
            match self
                .count
                .compare_exchange_weak(current, current - 1, Acquire, Relaxed)
            {
                Ok(_) => return true,
                Err(seen) => current = seen,
            }
        }
        false
    }

    /// Gives a permit back and wakes one sleeper, if any.
    /// We can't tell if there's somebody waiting, so the wake is unconditional.
    pub fn release(&self) {
        self.count.fetch_add(1, Release);
        wake_one(&self.count);
    }

    /// A snapshot of the count, it may be stale by the time you look at it.
    pub fn available(&self) -> u32 {
        self.count.load(Relaxed)
    }
}

impl std::fmt::Debug for Semaphore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Semaphore")
            .field("available", &self.available())
            .finish()
    }
}
