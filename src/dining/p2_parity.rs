//! # Left-handed and right-handed philosophers
//!
//! Even seats take the left fork first, odd seats take the right one first.
//! Neighbours never go for the forks in the same direction, so
//! there's no way for everybody to hold one fork and wait for the other.
//!
//! With an odd number of seats the last seat and seat 0 are both even.
//! That's fine: they compete for fork 0 first-and-second, not in a circle.

use super::Table;
use crate::coordinator::{cast, Actor, Coordinator, Role};

pub struct ParityTable {
    table: Table,
}

impl ParityTable {
    pub fn new(seats: usize) -> Self {
        Self {
            table: Table::new(seats),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The forks in the order the seat picks them up
    fn pickup_order(&self, seat: usize) -> [usize; 2] {
        let (left, right) = (self.table.left(seat), self.table.right(seat));
        if seat % 2 == 0 {
            [left, right]
        } else {
            [right, left]
        }
    }
}

impl Coordinator for ParityTable {
    fn actors(&self) -> Vec<Actor> {
        cast(&[Role::Philosopher], self.table.seats())
    }

    fn enter(&self, actor: Actor) {
        assert_eq!(actor.role, Role::Philosopher, "only philosophers dine");
        let seat = actor.seat();
        for fork in self.pickup_order(seat) {
            self.table.take(seat, fork);
        }
    }

    fn exit(&self, actor: Actor) {
        let seat = actor.seat();
        for fork in self.pickup_order(seat) {
            self.table.put(seat, fork);
        }
    }

    fn summary(&self) -> Option<String> {
        Some(self.table.summary())
    }
}
