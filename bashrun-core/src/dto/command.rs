//! Command DTOs

use serde::{Deserialize, Serialize};

/// Request to run a batch of shell command strings
///
/// The list may be empty and may contain duplicates. Order is preserved on
/// the wire but results are not guaranteed to follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommands {
    pub bash_strings: Vec<String>,
}

impl CreateCommands {
    pub fn new(bash_strings: Vec<String>) -> Self {
        Self { bash_strings }
    }

    pub fn len(&self) -> usize {
        self.bash_strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bash_strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_body() {
        let req: CreateCommands =
            serde_json::from_str(r#"{"bash_strings": ["echo a", "echo a"]}"#).unwrap();

        assert_eq!(req.len(), 2);
        assert_eq!(req.bash_strings[0], req.bash_strings[1]);
    }

    #[test]
    fn test_empty_request() {
        let req: CreateCommands = serde_json::from_str(r#"{"bash_strings": []}"#).unwrap();
        assert!(req.is_empty());
    }
}
