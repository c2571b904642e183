//! Block state machine for SCHEDULE sections
//!
//! Control lines (`DATES`, `WCONHIST`, `/`) change the state; every other
//! line is classified by the state it arrives in. The transition is a pure
//! function so the machine can be exercised without any I/O.

use serde::Serialize;

use crate::constants::{DATES_KEYWORD, TERMINATOR, WCONHIST_KEYWORD};

/// Which block, if any, is currently open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SectionState {
    #[default]
    Inactive,
    InDateBlock,
    InRateBlock,
}

/// What the parser should do with one logical line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineAction {
    /// A keyword line opened a block
    OpenBlock,
    /// The terminator closed a date block; the next date record starts
    CloseDateBlock,
    /// The terminator closed a rate block or arrived outside any block
    CloseBlock,
    /// Data line inside a date block
    DateLine,
    /// Data line inside a rate block
    RateLine,
    /// Data line outside any block
    Ignore,
}

impl LineAction {
    pub fn is_control(self) -> bool {
        matches!(
            self,
            LineAction::OpenBlock | LineAction::CloseDateBlock | LineAction::CloseBlock
        )
    }
}

impl SectionState {
    /// Whether a block is open, i.e. the file would end mid-block in this state
    pub fn is_open(self) -> bool {
        self != SectionState::Inactive
    }
}

/// Compute the next state and the action for `line`
///
/// `line` is a stripped logical line; keywords and the terminator must
/// match the whole line exactly.
pub fn transition(state: SectionState, line: &str) -> (SectionState, LineAction) {
    match line {
        DATES_KEYWORD => (SectionState::InDateBlock, LineAction::OpenBlock),
        WCONHIST_KEYWORD => (SectionState::InRateBlock, LineAction::OpenBlock),
        TERMINATOR if state == SectionState::InDateBlock => {
            (SectionState::Inactive, LineAction::CloseDateBlock)
        }
        TERMINATOR => (SectionState::Inactive, LineAction::CloseBlock),
        _ => match state {
            SectionState::Inactive => (state, LineAction::Ignore),
            SectionState::InDateBlock => (state, LineAction::DateLine),
            SectionState::InRateBlock => (state, LineAction::RateLine),
        },
    }
}
