//! Response DTOs
//!
//! Records are returned as their domain entities; only the shapes that
//! have no entity live here.

use serde::{Deserialize, Serialize};

/// `{"message": ...}` body returned by deletes and the API root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
