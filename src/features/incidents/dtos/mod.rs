pub mod incident_dto;

pub use incident_dto::{AssignIncidentsDto, CreateIncidentDto, IncidentResponseDto};
