pub mod models;
pub mod repository;

pub use models::Space;
pub use repository::SpaceRepository;
