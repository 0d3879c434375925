//! # Primitives
//!
//! Everything else is built from these two:
//! - [Semaphore] - a counter of permits with blocking acquire and waking release,
//!   made with the same [atomic-wait](https://crates.io/crates/atomic-wait) wait & wake as the futex mutex
//! - [Lightswitch] - a group gate over some other semaphore: first in takes it, last out gives it back

pub mod p1_semaphore;
pub mod p2_lightswitch;

pub use p1_semaphore::Semaphore;
pub use p2_lightswitch::Lightswitch;
