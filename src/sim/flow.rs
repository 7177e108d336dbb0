//! Screen flow and opening-screen message state

use crate::consts::{FIREWORKS_DELAY_MS, TRANSITION_DURATION_MS};
use crate::content::{NO_MESSAGES, OPENING_SCREEN};

/// The three screens of the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Question with yes/no buttons
    Opening,
    /// Fade to black with fireworks
    Transition,
    /// Final celebration
    Celebration,
}

impl Screen {
    /// Screen after the user accepts; only valid from `Opening`
    pub fn accept(self) -> Self {
        match self {
            Screen::Opening => Screen::Transition,
            other => other,
        }
    }

    /// Screen after the transition animation has run its course
    pub fn complete_transition(self) -> Self {
        match self {
            Screen::Transition => Screen::Celebration,
            other => other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Opening => "opening",
            Screen::Transition => "transition",
            Screen::Celebration => "celebration",
        }
    }
}

/// Timeline of the transition screen, in ms since mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTimeline {
    pub fireworks_at_ms: u32,
    pub complete_at_ms: u32,
}

impl Default for TransitionTimeline {
    fn default() -> Self {
        Self {
            fireworks_at_ms: FIREWORKS_DELAY_MS,
            complete_at_ms: TRANSITION_DURATION_MS,
        }
    }
}

/// Decline counter and the message it selects
#[derive(Debug, Clone, Default)]
pub struct OpeningState {
    message_index: usize,
    decline_clicks: u32,
}

impl OpeningState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decline_clicks(&self) -> u32 {
        self.decline_clicks
    }

    pub fn message_index(&self) -> usize {
        self.message_index
    }

    /// Record a click on the decline button and move to the next message
    pub fn decline(&mut self) -> &'static str {
        self.decline_clicks = self.decline_clicks.saturating_add(1);
        self.message_index = (self.message_index + 1) % NO_MESSAGES.len();
        log::debug!("Decline #{} -> message {}", self.decline_clicks, self.message_index);
        self.current_message()
    }

    /// Timer-driven advance; does nothing until the user has declined once
    pub fn auto_cycle(&mut self) -> Option<&'static str> {
        if self.decline_clicks == 0 {
            return None;
        }
        self.message_index = (self.message_index + 1) % NO_MESSAGES.len();
        Some(self.current_message())
    }

    /// The question until the first decline, then the current decline message
    pub fn current_message(&self) -> &'static str {
        if self.decline_clicks == 0 {
            OPENING_SCREEN.question
        } else {
            NO_MESSAGES[self.message_index]
        }
    }

    /// The sparkle next to the question only shows before any decline
    pub fn show_sparkle(&self) -> bool {
        self.decline_clicks == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_transitions() {
        assert_eq!(Screen::Opening.accept(), Screen::Transition);
        assert_eq!(Screen::Transition.complete_transition(), Screen::Celebration);
        // Out-of-order triggers are ignored
        assert_eq!(Screen::Celebration.accept(), Screen::Celebration);
        assert_eq!(Screen::Opening.complete_transition(), Screen::Opening);
    }

    #[test]
    fn test_question_until_first_decline() {
        let mut state = OpeningState::new();
        assert_eq!(state.current_message(), OPENING_SCREEN.question);
        assert!(state.show_sparkle());
        assert_eq!(state.auto_cycle(), None);
        assert_eq!(state.decline(), NO_MESSAGES[1]);
        assert!(!state.show_sparkle());
    }

    #[test]
    fn test_five_declines_advance_one_each() {
        let mut state = OpeningState::new();
        for click in 1..=5 {
            let before = state.message_index();
            state.decline();
            assert_eq!(state.message_index(), (before + 1) % NO_MESSAGES.len());
            assert_eq!(state.decline_clicks(), click);
        }
        assert_eq!(state.message_index(), 5);
    }

    #[test]
    fn test_index_wraps() {
        let mut state = OpeningState::new();
        for _ in 0..NO_MESSAGES.len() {
            state.decline();
        }
        assert_eq!(state.message_index(), 0);
        assert_eq!(state.current_message(), NO_MESSAGES[0]);
        state.auto_cycle();
        assert_eq!(state.message_index(), 1);
    }

    #[test]
    fn test_timeline_defaults() {
        let timeline = TransitionTimeline::default();
        assert_eq!(timeline.fireworks_at_ms, 500);
        assert_eq!(timeline.complete_at_ms, 3500);
    }
}
