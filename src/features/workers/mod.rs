pub mod models;
pub mod repository;

pub use models::Worker;
pub use repository::WorkerRepository;
