//! Reveal timer hook.
//!
//! Owns the task that types out the secret message. At most one reveal runs
//! at a time: restarting cancels the previous task, and the task is
//! cancelled when the owning component is dropped.

use std::time::Duration;

use agency_core::{run_reveal, AccessForm};
use dioxus::prelude::*;

/// Handle to the running reveal task
#[derive(Clone, Copy)]
pub struct RevealTimer {
    task: Signal<Option<Task>>,
}

impl RevealTimer {
    /// Cancel any running reveal and start a new one from the form's cursor
    pub fn restart(&mut self, interval: Duration, form: Signal<AccessForm>) {
        self.cancel();

        let mut form = form;
        let task = spawn(async move {
            tracing::debug!(interval_ms = interval.as_millis() as u64, "Reveal started");
            run_reveal(interval, move || form.write().tick_reveal()).await;
            tracing::debug!("Reveal finished");
        });
        self.task.set(Some(task));
    }

    /// Stop the running reveal, if any
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
            tracing::trace!("Reveal task cancelled");
        }
    }
}

/// Create the reveal timer for the current component
pub fn use_reveal_timer() -> RevealTimer {
    let task = use_signal(|| None::<Task>);

    use_drop(move || {
        if let Ok(current) = task.try_peek() {
            if let Some(running) = *current {
                running.cancel();
            }
        }
    });

    RevealTimer { task }
}
