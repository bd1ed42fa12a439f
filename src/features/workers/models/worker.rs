use serde::{Deserialize, Serialize};

/// A maintenance worker, identified by email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    pub email: String,
    pub name: String,
}
