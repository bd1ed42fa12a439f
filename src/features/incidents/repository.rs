use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::incidents::models::Incident;

/// Storage abstraction for incidents. Implementations live in the embedding
/// application; this crate only ships in-memory fakes for its own tests.
#[async_trait]
pub trait IncidentRepository: Send + Sync {
    /// Persist a newly created incident
    async fn save(&self, incident: &Incident) -> Result<()>;

    /// Persist changes to an existing incident
    async fn update(&self, incident: &Incident) -> Result<()>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Incident>>;

    async fn find_all(&self) -> Result<Vec<Incident>>;

    async fn find_by_worker_email(&self, email: &str) -> Result<Vec<Incident>>;

    async fn find_by_group(&self, group_id: i32) -> Result<Vec<Incident>>;
}
