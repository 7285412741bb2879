//! Command domain types

use serde::{Deserialize, Serialize};

/// Result of running exactly one command string
///
/// `log` holds the captured standard output when `is_error` is false and the
/// captured standard error when it is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    pub command: String,
    pub is_error: bool,
    pub log: String,
}

impl CommandOutcome {
    /// Outcome of a command that wrote something to standard output
    pub fn succeeded(command: impl Into<String>, stdout: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            is_error: false,
            log: stdout.into(),
        }
    }

    /// Outcome of a command that wrote nothing to standard output
    pub fn failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            is_error: true,
            log: stderr.into(),
        }
    }
}

/// A command outcome as persisted by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCommand {
    pub id: i64,
    pub command: String,
    pub is_error: bool,
    pub log: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<StoredCommand> for CommandOutcome {
    fn from(stored: StoredCommand) -> Self {
        Self {
            command: stored.command,
            is_error: stored.is_error,
            log: stored.log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_wire_format() {
        let outcome = CommandOutcome::succeeded("echo hi", "hi\n");
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"command": "echo hi", "is_error": false, "log": "hi\n"})
        );
    }

    #[test]
    fn test_failed_outcome_keeps_stderr() {
        let outcome = CommandOutcome::failed("pws", "sh: 1: pws: not found\n");
        assert!(outcome.is_error);
        assert!(outcome.log.contains("not found"));
    }

    #[test]
    fn test_stored_command_into_outcome() {
        let stored = StoredCommand {
            id: 7,
            command: "ls".to_string(),
            is_error: false,
            log: "Cargo.toml\n".to_string(),
            created_at: chrono::Utc::now(),
        };

        let outcome: CommandOutcome = stored.into();
        assert_eq!(outcome, CommandOutcome::succeeded("ls", "Cargo.toml\n"));
    }
}
