//! Countdown state machine for the clue modal.
//! Pure state: the component that owns it installs and cancels the actual
//! one-second ticker, so everything here is testable by just applying
//! actions. Two states, stopped and running; the displayed value is part of
//! the state, not read back from the DOM.

use std::rc::Rc;
use yew::Reducible;

/// Seconds shown when the countdown is (re)armed.
pub const COUNTDOWN_START_SECS: i32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    /// Value currently displayed. May sit at or below zero after natural
    /// expiry; only `start`/`stop`/`reset_display` bring it back to 30.
    pub remaining: i32,
    /// Whether a ticker should be driving `remaining` down.
    pub running: bool,
    /// Whether the countdown element is shown at all.
    pub visible: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            remaining: COUNTDOWN_START_SECS,
            running: false,
            visible: false,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum CountdownAction {
    /// Arm the countdown: display back to 30, element visible, ticking.
    /// Starting while already running simply re-arms; the owner replaces the
    /// ticker so only one is ever live.
    Start,
    /// One second elapsed. Reaching zero flips `running` off (the ticker
    /// self-cancels) but leaves the displayed value where it landed.
    Tick,
    /// Unconditional stop: not ticking, hidden, display back at 30. Valid
    /// whenever called: before start, mid-run, or after expiry.
    Stop,
    /// Cosmetic reset of the displayed value only.
    ResetDisplay,
}

impl Countdown {
    pub fn apply(self, action: CountdownAction) -> Self {
        match action {
            CountdownAction::Start => Self {
                remaining: COUNTDOWN_START_SECS,
                running: true,
                visible: true,
            },
            CountdownAction::Tick => {
                if !self.running {
                    return self;
                }
                let remaining = self.remaining - 1;
                Self {
                    remaining,
                    running: remaining > 0,
                    ..self
                }
            }
            CountdownAction::Stop => Self::default(),
            CountdownAction::ResetDisplay => Self {
                remaining: COUNTDOWN_START_SECS,
                ..self
            },
        }
    }
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CountdownAction::*;

    fn ticks(mut countdown: Countdown, n: usize) -> Countdown {
        for _ in 0..n {
            countdown = countdown.apply(Tick);
        }
        countdown
    }

    #[test]
    fn starts_at_thirty_visible_and_running() {
        let countdown = Countdown::default().apply(Start);
        assert_eq!(countdown.remaining, 30);
        assert!(countdown.running);
        assert!(countdown.visible);
    }

    #[test]
    fn ticks_decrement_once_per_second() {
        let countdown = ticks(Countdown::default().apply(Start), 7);
        assert_eq!(countdown.remaining, 23);
        assert!(countdown.running);
    }

    #[test]
    fn restart_rearms_single_sequence() {
        // Start, run a while, start again: the display snaps back to 30 and
        // keeps decrementing one per tick, never two.
        let countdown = ticks(Countdown::default().apply(Start), 12);
        let countdown = countdown.apply(Start);
        assert_eq!(countdown.remaining, 30);
        let countdown = ticks(countdown, 3);
        assert_eq!(countdown.remaining, 27);
    }

    #[test]
    fn expiry_stops_ticking_without_resetting_display() {
        let countdown = ticks(Countdown::default().apply(Start), 30);
        assert_eq!(countdown.remaining, 0);
        assert!(!countdown.running);
        assert!(countdown.visible);
        // Stray ticks after expiry change nothing.
        let countdown = ticks(countdown, 5);
        assert_eq!(countdown.remaining, 0);
    }

    #[test]
    fn stop_always_lands_on_idle_thirty() {
        for countdown in [
            Countdown::default(),
            Countdown::default().apply(Start),
            ticks(Countdown::default().apply(Start), 17),
            ticks(Countdown::default().apply(Start), 30),
        ] {
            let stopped = countdown.apply(Stop);
            assert_eq!(stopped.remaining, 30);
            assert!(!stopped.running);
            assert!(!stopped.visible);
        }
    }

    #[test]
    fn reset_display_touches_only_the_value() {
        let countdown = ticks(Countdown::default().apply(Start), 10);
        let reset = countdown.apply(ResetDisplay);
        assert_eq!(reset.remaining, 30);
        assert_eq!(reset.running, countdown.running);
        assert_eq!(reset.visible, countdown.visible);
    }

    #[test]
    fn tick_before_start_is_ignored() {
        let countdown = Countdown::default().apply(Tick);
        assert_eq!(countdown, Countdown::default());
    }
}
