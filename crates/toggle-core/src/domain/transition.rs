//! The two-state toggle table.
//!
//! A toggle alternates a setting between two candidate values.  The table
//! has no hidden state: classification of the current value against the
//! candidate pair fully determines the next value, and a value matching
//! neither candidate is `Unrecognized`, which aborts the invocation (the
//! host writes nothing in that case).
//!
//! Candidates are read fresh from the configuration store at every
//! invocation, so editing them takes effect on the next toggle; this module
//! only ever sees the pair for the current invocation.

use crate::domain::value::ToggleValue;

/// Classification of a current value against the candidate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// The current value equals the first candidate; next is the second.
    MatchesFirst,
    /// The current value equals the second candidate; next is the first.
    MatchesSecond,
    /// The current value equals neither candidate; nothing is written.
    Unrecognized,
}

/// The ordered candidate pair a toggle alternates between.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleCandidates {
    pub first: ToggleValue,
    pub second: ToggleValue,
}

impl ToggleCandidates {
    pub fn new(first: ToggleValue, second: ToggleValue) -> Self {
        Self { first, second }
    }

    /// Classifies `current` with kind-aware equality.
    ///
    /// The first candidate is checked first, so when both candidates are the
    /// same value the table degenerates to the identity toggle rather than
    /// an error.
    pub fn classify(&self, current: &ToggleValue) -> ToggleState {
        if *current == self.first {
            ToggleState::MatchesFirst
        } else if *current == self.second {
            ToggleState::MatchesSecond
        } else {
            ToggleState::Unrecognized
        }
    }

    /// The value to write next, or `None` when `current` is unrecognized.
    pub fn next(&self, current: &ToggleValue) -> Option<&ToggleValue> {
        match self.classify(current) {
            ToggleState::MatchesFirst => Some(&self.second),
            ToggleState::MatchesSecond => Some(&self.first),
            ToggleState::Unrecognized => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
