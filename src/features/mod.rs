pub mod incidents;
pub mod spaces;
pub mod workers;
