//! Runner configuration
//!
//! Selects the shell interpreter every command string is handed to.

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Shell program used to interpret command strings (e.g., "sh")
    pub shell: String,

    /// Flag that makes the shell read the command from the next argument
    pub shell_flag: String,
}

impl RunnerConfig {
    /// Creates a new configuration
    pub fn new(shell: impl Into<String>, shell_flag: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            shell_flag: shell_flag.into(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - BASHRUN_SHELL (optional, default: sh)
    /// - BASHRUN_SHELL_FLAG (optional, default: -c)
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let shell = std::env::var("BASHRUN_SHELL").unwrap_or(defaults.shell);
        let shell_flag = std::env::var("BASHRUN_SHELL_FLAG").unwrap_or(defaults.shell_flag);

        let config = Self { shell, shell_flag };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.shell.trim().is_empty() {
            anyhow::bail!("shell cannot be empty");
        }

        if self.shell_flag.trim().is_empty() {
            anyhow::bail!("shell_flag cannot be empty");
        }

        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new("sh", "-c")
    }
}
