//! # Driver
//!
//! One OS thread per actor, each of them looping think -> enter -> act -> exit.
//! The coordinator and the action are shared between the threads through [Arc]-s,
//! there's no global state.
//!
//! Without a cycle limit the actors never stop, and neither does [run].

use std::{
    sync::Arc,
    thread::{self, sleep},
    time::Duration,
};

use crate::{
    coordinator::{Actor, Coordinator},
    error::Error,
    settings::Settings,
};

/// What a bounded run did
#[derive(Debug)]
pub struct Report {
    /// completed cycles per actor, in the spawn order
    pub cycles: Vec<(Actor, u64)>,
}

pub fn run<F>(
    coordinator: Arc<dyn Coordinator>,
    settings: &Settings,
    act: F,
) -> Result<Report, Error>
where
    F: Fn(Actor) + Send + Sync + 'static,
{
    let act = Arc::new(act);
    let mut handles = Vec::new();

    for actor in coordinator.actors() {
        let coordinator = coordinator.clone();
        let act = act.clone();
        let (pause, cycles) = (settings.pause, settings.cycles);

        let handle = thread::Builder::new()
            .name(format!("{}-{}", actor.role.to_string().to_lowercase(), actor.id))
            .spawn(move || live(&*coordinator, actor, pause, cycles, &*act))
            .map_err(|source| Error::Spawn {
                role: actor.role,
                id: actor.id,
                source,
            })?;
        handles.push((actor, handle));
    }
    tracing::debug!(actors = handles.len(), "all actors are running");

    let mut report = Report {
        cycles: Vec::with_capacity(handles.len()),
    };
    for (actor, handle) in handles {
        let done = handle.join().map_err(|_| Error::ActorPanicked {
            role: actor.role,
            id: actor.id,
        })?;
        report.cycles.push((actor, done));
    }

    match coordinator.summary() {
        Some(summary) => tracing::info!(%summary, "all actors are done"),
        None => tracing::info!("all actors are done"),
    }
    Ok(report)
}

/// The actor's life, returns the number of cycles it went through
fn live(
    coordinator: &dyn Coordinator,
    actor: Actor,
    pause: Duration,
    cycles: Option<u64>,
    act: &(dyn Fn(Actor) + Send + Sync),
) -> u64 {
    let mut done = 0;
    while cycles.map_or(true, |limit| done < limit) {
        if !pause.is_zero() {
            sleep(pause);
        }
        coordinator.enter(actor);
        act(actor);
        coordinator.exit(actor);
        done += 1;
    }
    done
}
