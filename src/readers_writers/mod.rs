//! # Readers and writers
//!
//! Many readers may be in the room at the same time, a writer needs the room for itself.
//!
//! Both solutions use a [Lightswitch](crate::primitives::Lightswitch) to let the readers share one "room is busy" semaphore.
//! The difference is in who can starve whom:
//! - [p1_turnstile] - a waiting writer stops new readers at the turnstile, so writers don't starve
//! - [p2_no_starvation] - each group closes the door for the other one, so neither of them starves

pub mod p1_turnstile;
pub mod p2_no_starvation;
