//! Incident tracking for the campus facility-management backend.
//!
//! Incidents are reported against physical spaces, assigned to maintenance
//! workers in batches (each batch shares a group id), and moved through their
//! lifecycle group by group. Storage is abstracted behind repository traits;
//! the embedding application provides the implementations.

pub mod core;
pub mod features;
pub mod shared;

pub use crate::core::error::{AppError, Result};
pub use crate::features::incidents::IncidentService;
