//! # Dining philosophers
//!
//! N philosophers around a table, a fork between each two of them.
//! Philosopher at seat `i` needs the fork on the left (`i`) and on the right (`(i + 1) % N`).
//!
//! Taking the forks naively (everybody left first) deadlocks as soon as everybody holds their left fork.
//! The two fixes:
//! - [p1_footman] - only N-1 philosophers may go for the forks at once
//! - [p2_parity] - even seats go left first, odd seats go right first
//!
//! Both share the [Table] with its forks, the difference is only in the order of things.

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering::Relaxed};

use crate::primitives::Semaphore;

pub mod p1_footman;
pub mod p2_parity;

/// Forks plus some bookkeeping of who holds what.
///
/// The counters go up right after a fork is taken and down right before it's put back,
/// so they never count more than what's actually in hand.
pub struct Table {
    forks: Vec<Semaphore>,
    /// forks held per seat
    in_hands: Vec<AtomicU32>,
    forks_in_hand: AtomicUsize,
    peak_forks_in_hand: AtomicUsize,
    holders: AtomicUsize,
    peak_holders: AtomicUsize,
}

impl Table {
    /// # Panics
    /// - with less than 2 seats, there's no pair of forks to eat with
    pub fn new(seats: usize) -> Self {
        assert!(seats >= 2, "a table needs 2 seats at least");
        Self {
            forks: (0..seats).map(|_| Semaphore::new(1)).collect(),
            in_hands: (0..seats).map(|_| AtomicU32::new(0)).collect(),
            forks_in_hand: AtomicUsize::new(0),
            peak_forks_in_hand: AtomicUsize::new(0),
            holders: AtomicUsize::new(0),
            peak_holders: AtomicUsize::new(0),
        }
    }

    pub fn seats(&self) -> usize {
        self.forks.len()
    }

    pub fn left(&self, seat: usize) -> usize {
        seat
    }

    pub fn right(&self, seat: usize) -> usize {
        (seat + 1) % self.seats()
    }

    /// Blocks until the fork is free
    pub fn take(&self, seat: usize, fork: usize) {
        self.forks[fork].acquire();
        tracing::trace!(seat, fork, "fork taken");

        let in_hand = self.forks_in_hand.fetch_add(1, Relaxed) + 1;
        self.peak_forks_in_hand.fetch_max(in_hand, Relaxed);
        if self.in_hands[seat].fetch_add(1, Relaxed) == 0 {
            let holders = self.holders.fetch_add(1, Relaxed) + 1;
            self.peak_holders.fetch_max(holders, Relaxed);
        }
    }

    pub fn put(&self, seat: usize, fork: usize) {
        if self.in_hands[seat].fetch_sub(1, Relaxed) == 1 {
            self.holders.fetch_sub(1, Relaxed);
        }
        self.forks_in_hand.fetch_sub(1, Relaxed);

        tracing::trace!(seat, fork, "fork put back");
        self.forks[fork].release();
    }

    pub fn forks_in_hand(&self) -> usize {
        self.forks_in_hand.load(Relaxed)
    }

    /// The most forks ever held at the same time
    pub fn peak_forks_in_hand(&self) -> usize {
        self.peak_forks_in_hand.load(Relaxed)
    }

    /// The most philosophers ever holding at least one fork at the same time
    pub fn peak_holders(&self) -> usize {
        self.peak_holders.load(Relaxed)
    }

    pub fn summary(&self) -> String {
        format!(
            "peak forks in hand: {}, peak philosophers holding a fork: {}",
            self.peak_forks_in_hand(),
            self.peak_holders()
        )
    }
}
