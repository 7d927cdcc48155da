// src/exit.rs
//! Process exit codes for `linkrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::RankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LinkRankExit {
    /// Ranking completed and converged.
    Success = 0,
    /// Generic error (e.g. IO).
    Error = 1,
    /// Input validation failed (malformed record, empty graph, bad parameter).
    InvalidInput = 2,
    /// Iteration ceiling reached; a best-effort ranking was still produced.
    NotConverged = 3,
}

impl LinkRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for LinkRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&RankError> for LinkRankExit {
    fn from(err: &RankError) -> Self {
        match err {
            RankError::NonConvergence { .. } => Self::NotConverged,
            e if e.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}
