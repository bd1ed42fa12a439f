use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::workers::models::Worker;

/// Lookup used to validate assignment targets
#[async_trait]
pub trait WorkerRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Worker>>;
}
