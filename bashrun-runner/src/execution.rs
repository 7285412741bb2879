//! Execution types for the bashrun runner
//!
//! These types only exist while a batch is being executed and handed to the
//! caller. Persistence uses the core domain types.

use bashrun_core::domain::command::CommandOutcome;

use crate::error::ExecError;

/// Aggregated result of a batch
///
/// `outcomes` holds one entry per runner that produced an outcome, in
/// completion order. Runners that hit an infrastructure failure have no entry
/// and are only counted in `failures`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub outcomes: Vec<CommandOutcome>,
    pub failures: usize,
}

impl BatchResult {
    /// Whether at least one runner hit an infrastructure failure
    pub fn is_failed(&self) -> bool {
        self.failures > 0
    }

    /// The aggregated error, if any runner failed
    ///
    /// The outcomes stay available alongside the error.
    pub fn error(&self) -> Option<ExecError> {
        self.is_failed().then_some(ExecError::Subprocess {
            failures: self.failures,
        })
    }

    /// Splits the result into the outcomes and the aggregated error
    pub fn into_parts(self) -> (Vec<CommandOutcome>, Option<ExecError>) {
        let error = self.error();
        (self.outcomes, error)
    }
}
