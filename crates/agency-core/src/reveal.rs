//! Typewriter reveal of the secret message.
//!
//! [`Reveal`] is the cursor into the message; [`run_reveal`] is the timer
//! loop that advances it. The caller owns the future returned by
//! `run_reveal` and cancels it by dropping it.

use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Time between two revealed characters
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(26);

/// Number of characters of the message currently shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    cursor: usize,
    total: usize,
}

impl Reveal {
    /// A reveal over a message with `total` characters, nothing shown yet
    pub fn new(total: usize) -> Self {
        Self { cursor: 0, total }
    }

    /// A reveal sized for `message`
    pub fn for_message(message: &str) -> Self {
        Self::new(message.chars().count())
    }

    /// Characters shown so far
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Characters in the full message
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether the whole message is shown
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.total
    }

    /// Hide everything again
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// Show one more character. Returns `true` while characters remain.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.cursor += 1;
        !self.is_complete()
    }

    /// The shown prefix of `message`
    pub fn visible<'a>(&self, message: &'a str) -> &'a str {
        match message.char_indices().nth(self.cursor) {
            Some((end, _)) => &message[..end],
            None => message,
        }
    }
}

/// Call `step` once per `interval` until it returns `false`.
///
/// The first call happens one full interval after start. Dropping the future
/// stops the loop.
pub async fn run_reveal<F>(interval: Duration, mut step: F)
where
    F: FnMut() -> bool,
{
    let mut ticker = interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut ticks = 0usize;
    loop {
        ticker.tick().await;
        ticks += 1;
        if !step() {
            break;
        }
    }
    tracing::trace!(ticks, "Reveal loop finished");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_until_complete() {
        let mut reveal = Reveal::new(3);
        assert_eq!(reveal.cursor(), 0);
        assert!(reveal.tick());
        assert!(reveal.tick());
        assert!(!reveal.tick());
        assert!(reveal.is_complete());
        assert_eq!(reveal.cursor(), 3);

        // Further ticks do nothing
        assert!(!reveal.tick());
        assert_eq!(reveal.cursor(), 3);
    }

    #[test]
    fn restart_resets_cursor() {
        let mut reveal = Reveal::new(5);
        reveal.tick();
        reveal.tick();
        reveal.restart();
        assert_eq!(reveal.cursor(), 0);
        assert_eq!(reveal.total(), 5);
    }

    #[test]
    fn visible_respects_char_boundaries() {
        let message = "são";
        let mut reveal = Reveal::for_message(message);
        assert_eq!(reveal.visible(message), "");
        reveal.tick();
        reveal.tick();
        assert_eq!(reveal.visible(message), "sã");
        reveal.tick();
        assert_eq!(reveal.visible(message), "são");
    }

    #[test]
    fn empty_message_is_already_complete() {
        let mut reveal = Reveal::for_message("");
        assert!(reveal.is_complete());
        assert!(!reveal.tick());
        assert_eq!(reveal.cursor(), 0);
    }
}
