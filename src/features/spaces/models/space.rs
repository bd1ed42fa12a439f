use serde::{Deserialize, Serialize};

/// A physical space on campus, as registered in the facilities inventory.
/// Read-only from this crate's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    /// External identifier assigned by the campus inventory system
    pub space_id: String,
    pub name: String,
    pub building: String,
}
