use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::features::incidents::models::{Incident, IncidentStatus};

/// Request DTO for reporting an incident
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateIncidentDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    /// When the problem was observed
    pub reported_at: DateTime<Utc>,

    /// External id of the space the incident belongs to
    #[validate(length(min = 1, message = "Space id must not be empty"))]
    pub space_id: String,

    /// Deadline for resolving the incident
    pub due_at: DateTime<Utc>,
}

/// Request DTO for assigning a batch of incidents to a worker
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignIncidentsDto {
    #[validate(email(message = "Invalid email format"))]
    pub worker_email: String,

    #[validate(length(min = 1, message = "At least one incident id is required"))]
    pub incident_ids: Vec<Uuid>,
}

/// Response DTO for incident
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub reported_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub space_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_email: Option<String>,
    pub status: IncidentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i32>,
}

impl From<Incident> for IncidentResponseDto {
    fn from(i: Incident) -> Self {
        Self {
            id: i.id,
            name: i.name,
            description: i.description,
            reported_at: i.reported_at,
            due_at: i.due_at,
            space_id: i.space_id,
            worker_email: i.worker_email,
            status: i.status,
            group_id: i.group_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_create_dto_rejects_empty_name() {
        let dto = CreateIncidentDto {
            name: "".to_string(),
            description: "Radiator cold in winter".to_string(),
            reported_at: Utc::now(),
            space_id: "ada-1.10".to_string(),
            due_at: Utc::now(),
        };

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_assign_dto_rejects_malformed_email() {
        let dto = AssignIncidentsDto {
            worker_email: "not-an-email".to_string(),
            incident_ids: vec![Uuid::new_v4()],
        };

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_assign_dto_rejects_empty_batch() {
        let dto = AssignIncidentsDto {
            worker_email: "worker@campus.es".to_string(),
            incident_ids: vec![],
        };

        assert!(dto.validate().is_err());
    }
}
