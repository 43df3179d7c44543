//! Outcome shaping shared by command handlers.

pub(crate) mod outcome;
