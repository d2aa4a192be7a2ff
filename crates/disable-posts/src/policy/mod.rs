//! Request-facing policy decisions.
//!
//! The two handlers here are the only parts of the crate with branching
//! policy and externally observable HTTP semantics; everything else is
//! registry pruning.

pub mod listing;
pub mod outcome;
