//! Command-related API endpoints

use bashrun_core::domain::command::{CommandOutcome, StoredCommand};
use bashrun_core::dto::command::CreateCommands;
use reqwest::StatusCode;

use crate::BashrunClient;
use crate::error::{ClientError, Result};

impl BashrunClient {
    /// Run a batch of commands on the server
    ///
    /// # Arguments
    /// * `req` - The commands to run
    ///
    /// # Returns
    /// The outcomes, in no particular order
    ///
    /// # Errors
    /// [`ClientError::PartialBatch`] when some runner failed; the outcomes
    /// that were produced are inside the error.
    ///
    /// # Example
    /// ```no_run
    /// # use bashrun_client::BashrunClient;
    /// # use bashrun_core::dto::command::CreateCommands;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = BashrunClient::new("http://localhost:8080");
    /// let outcomes = client
    ///     .create_commands(CreateCommands::new(vec!["echo hi".to_string()]))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_commands(&self, req: CreateCommands) -> Result<Vec<CommandOutcome>> {
        let url = format!("{}/bash/create-command", self.base_url);
        let response = self.client.post(&url).json(&req).send().await?;

        if response.status() == StatusCode::INTERNAL_SERVER_ERROR {
            let body = response.text().await?;
            return match serde_json::from_str::<Vec<CommandOutcome>>(&body) {
                Ok(outcomes) => Err(ClientError::PartialBatch { outcomes }),
                Err(_) => Err(ClientError::api_error(500, body)),
            };
        }

        self.handle_response(response).await
    }

    /// List every stored command
    pub async fn list_commands(&self) -> Result<Vec<StoredCommand>> {
        let url = format!("{}/bash/get-commands", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Get a stored command by ID
    pub async fn get_command(&self, id: i64) -> Result<StoredCommand> {
        let url = format!("{}/bash/get-commands/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Check that the server is up
    pub async fn health(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
