//! # The footman
//!
//! The footman lets at most N-1 philosophers go for the forks at the same time.
//! With one of them always out of the game, the circle of "hold one, wait for the next"
//! can't close, so somebody always gets both forks.
//!
//! Everybody takes the right fork first then the left one, it doesn't matter here.

use super::Table;
use crate::{
    coordinator::{cast, Actor, Coordinator, Role},
    primitives::Semaphore,
};

pub struct FootmanTable {
    table: Table,
    footman: Semaphore,
}

impl FootmanTable {
    pub fn new(seats: usize) -> Self {
        let table = Table::new(seats);
        let footman = Semaphore::new(seats as u32 - 1);
        Self { table, footman }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl Coordinator for FootmanTable {
    fn actors(&self) -> Vec<Actor> {
        cast(&[Role::Philosopher], self.table.seats())
    }

    fn enter(&self, actor: Actor) {
        assert_eq!(actor.role, Role::Philosopher, "only philosophers dine");
        let seat = actor.seat();
        tracing::trace!(seat, "waiting for the footman");
        self.footman.acquire();
        self.table.take(seat, self.table.right(seat));
        self.table.take(seat, self.table.left(seat));
    }

    fn exit(&self, actor: Actor) {
        let seat = actor.seat();
        self.table.put(seat, self.table.right(seat));
        self.table.put(seat, self.table.left(seat));
        self.footman.release();
    }

    fn summary(&self) -> Option<String> {
        Some(self.table.summary())
    }
}

#[cfg(test)]
mod test {
    use std::{
        sync::atomic::{AtomicBool, Ordering::Relaxed},
        thread::{scope, sleep},
        time::Duration,
    };

    use super::*;
    use crate::{driver::run, settings::Settings};

    #[test]
    fn test_last_philosopher_waits_for_the_footman() {
        let table = FootmanTable::new(3);
        let third_in = AtomicBool::new(false);

        // seat 0 eats and we pretend to be one more philosopher => the footman is out of permits
        table.enter(Actor::new(Role::Philosopher, 1));
        assert_eq!(table.footman.available(), 1);
        assert!(table.footman.try_acquire());

        scope(|s| {
            s.spawn(|| {
                table.enter(Actor::new(Role::Philosopher, 3));
                third_in.store(true, Relaxed);
                table.exit(Actor::new(Role::Philosopher, 3));
            });

            sleep(Duration::from_millis(100));
            assert!(!third_in.load(Relaxed));

            table.exit(Actor::new(Role::Philosopher, 1));
            table.footman.release();
        });

        assert!(third_in.load(Relaxed));
        assert_eq!(table.footman.available(), 2);
        assert_eq!(table.table.forks_in_hand(), 0);
    }

    #[test]
    fn test_never_more_than_n_minus_one_hold_forks() {
        let seats = 5;
        let coordinator = std::sync::Arc::new(FootmanTable::new(seats));
        let settings = Settings {
            actors: seats,
            pause: Duration::ZERO,
            cycles: Some(1_000),
        };

        run(coordinator.clone(), &settings, |_| std::thread::yield_now()).unwrap();

        let table = coordinator.table();
        assert!(table.peak_holders() <= seats - 1);
        assert!(table.peak_forks_in_hand() <= 2 * (seats - 1));
        assert_eq!(table.forks_in_hand(), 0);
    }
}
