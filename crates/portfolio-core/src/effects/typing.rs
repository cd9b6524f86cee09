//! Typewriter animation for the hero headline.
//!
//! The animation is a pure state machine: each [`Typewriter::tick`] yields
//! the text to display and how long to wait before the next tick.
//! [`animate`] drives it on any timer until its [`RunTicket`] goes stale.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

/// Delay before the first character appears.
pub const START_DELAY: Duration = Duration::from_millis(1000);
pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
/// How long a fully typed word stays on screen.
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);

/// One animation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    /// Wait before the next tick
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<Vec<char>>,
    word: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    /// `None` if there is no non-empty word to type.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<Vec<char>> = words
            .into_iter()
            .map(|w| w.as_ref().chars().collect::<Vec<_>>())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return None;
        }

        Some(Self {
            words,
            word: 0,
            shown: 0,
            phase: Phase::Typing,
        })
    }

    /// Index of the word currently being typed or deleted.
    pub fn word_index(&self) -> usize {
        self.word
    }

    /// Advance one character.
    pub fn tick(&mut self) -> Frame {
        let len = self.words[self.word].len();

        let delay = match self.phase {
            Phase::Typing => {
                self.shown += 1;
                if self.shown >= len {
                    self.phase = Phase::Deleting;
                    HOLD_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                    self.word = (self.word + 1) % self.words.len();
                    TYPE_DELAY
                } else {
                    DELETE_DELAY
                }
            }
        };

        let text = self.words[self.word][..self.shown].iter().collect();

        Frame { text, delay }
    }
}

/// Restart and cancel bookkeeping for a timer-driven task.
///
/// Every [`RunGuard::begin`] or [`RunGuard::cancel`] bumps the generation,
/// which makes every earlier ticket stale.
#[derive(Debug, Clone, Default)]
pub struct RunGuard {
    generation: Rc<Cell<u64>>,
}

/// Permission for one run to keep going.
#[derive(Debug, Clone)]
pub struct RunTicket {
    generation: Rc<Cell<u64>>,
    ticket: u64,
}

impl RunGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RunTicket {
        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);
        RunTicket {
            generation: Rc::clone(&self.generation),
            ticket,
        }
    }

    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
    }
}

impl RunTicket {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.ticket
    }
}

/// Run `writer` until `ticket` is stale, rendering each frame with `show`.
pub async fn animate<S, F>(mut writer: Typewriter, ticket: RunTicket, mut show: impl FnMut(&str), sleep: S)
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    sleep(START_DELAY).await;
    while ticket.is_current() {
        let frame = writer.tick();
        show(&frame.text);
        sleep(frame.delay).await;
    }
    tracing::debug!(ticket = ticket.ticket, "Typing animation stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_empty_word_list() {
        assert!(Typewriter::new(Vec::<String>::new()).is_none());
        assert!(Typewriter::new(["", ""]).is_none());
    }

    #[test]
    fn test_full_cycle() {
        let mut tw = Typewriter::new(["Hi", "Yo"]).unwrap();

        assert_eq!(tw.tick(), Frame { text: "H".into(), delay: TYPE_DELAY });
        assert_eq!(tw.tick(), Frame { text: "Hi".into(), delay: HOLD_DELAY });
        assert_eq!(tw.tick(), Frame { text: "H".into(), delay: DELETE_DELAY });
        assert_eq!(tw.tick(), Frame { text: "".into(), delay: TYPE_DELAY });
        assert_eq!(tw.word_index(), 1);
        assert_eq!(tw.tick(), Frame { text: "Y".into(), delay: TYPE_DELAY });
        assert_eq!(tw.tick(), Frame { text: "Yo".into(), delay: HOLD_DELAY });
        tw.tick();
        tw.tick();
        assert_eq!(tw.word_index(), 0);
    }

    #[test]
    fn test_single_character_word() {
        let mut tw = Typewriter::new(["A"]).unwrap();
        assert_eq!(tw.tick(), Frame { text: "A".into(), delay: HOLD_DELAY });
        assert_eq!(tw.tick(), Frame { text: "".into(), delay: TYPE_DELAY });
        assert_eq!(tw.tick(), Frame { text: "A".into(), delay: HOLD_DELAY });
    }

    #[test]
    fn test_multibyte_words_slice_on_chars() {
        let mut tw = Typewriter::new(["Café"]).unwrap();
        let frames: Vec<_> = (0..4).map(|_| tw.tick().text).collect();
        assert_eq!(frames, vec!["C", "Ca", "Caf", "Café"]);
    }

    #[test]
    fn test_newer_run_and_cancel_make_tickets_stale() {
        let guard = RunGuard::new();
        let first = guard.begin();
        assert!(first.is_current());

        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());

        guard.cancel();
        assert!(!second.is_current());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_future_frames() {
        let guard = RunGuard::new();
        let frames = RefCell::new(Vec::new());
        let writer = Typewriter::new(["ab"]).unwrap();

        tokio::join!(
            animate(writer, guard.begin(), |text| frames.borrow_mut().push(text.to_string()), tokio::time::sleep),
            async {
                // After "a" (1000ms) and "ab" (1100ms), during the hold.
                tokio::time::sleep(Duration::from_millis(1150)).await;
                guard.cancel();
            }
        );

        assert_eq!(*frames.borrow(), vec!["a", "ab"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_shown_when_cancelled_before_start() {
        let guard = RunGuard::new();
        let frames = RefCell::new(Vec::new());
        let ticket = guard.begin();
        guard.cancel();

        animate(
            Typewriter::new(["ab"]).unwrap(),
            ticket,
            |text| frames.borrow_mut().push(text.to_string()),
            tokio::time::sleep,
        )
        .await;

        assert!(frames.borrow().is_empty());
    }
}
