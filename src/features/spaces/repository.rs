use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::spaces::models::Space;

/// Lookup over the campus space inventory
#[async_trait]
pub trait SpaceRepository: Send + Sync {
    async fn find_by_space_id(&self, space_id: &str) -> Result<Option<Space>>;
}
