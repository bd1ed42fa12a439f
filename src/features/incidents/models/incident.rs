use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::AppError;

/// Incident lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentStatus {
    Unassigned,
    Assigned,
    #[serde(rename = "In progress")]
    InProgress,
    Invalid,
    Finished,
}

impl IncidentStatus {
    /// Whether a group of assigned incidents may be moved to this status.
    /// "Unassigned" and "Assigned" are only ever set by creation and
    /// assignment, never by a group transition.
    pub fn is_group_transition_target(&self) -> bool {
        matches!(
            self,
            IncidentStatus::InProgress | IncidentStatus::Invalid | IncidentStatus::Finished
        )
    }
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncidentStatus::Unassigned => write!(f, "Unassigned"),
            IncidentStatus::Assigned => write!(f, "Assigned"),
            IncidentStatus::InProgress => write!(f, "In progress"),
            IncidentStatus::Invalid => write!(f, "Invalid"),
            IncidentStatus::Finished => write!(f, "Finished"),
        }
    }
}

impl std::str::FromStr for IncidentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unassigned" => Ok(IncidentStatus::Unassigned),
            "Assigned" => Ok(IncidentStatus::Assigned),
            "In progress" => Ok(IncidentStatus::InProgress),
            "Invalid" => Ok(IncidentStatus::Invalid),
            "Finished" => Ok(IncidentStatus::Finished),
            other => Err(AppError::Validation(format!(
                "'{}' is not a valid incident status",
                other
            ))),
        }
    }
}

/// A reported facility problem tied to a campus space.
///
/// Incidents assigned in the same batch share a `group_id`; status changes
/// are applied per group. `group_id` and `worker_email` stay `None` until
/// the incident is assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub reported_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub space_id: String,
    pub worker_email: Option<String>,
    pub status: IncidentStatus,
    pub group_id: Option<i32>,
}

impl Incident {
    pub fn new(
        name: String,
        description: String,
        reported_at: DateTime<Utc>,
        space_id: String,
        due_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            reported_at,
            due_at,
            space_id,
            worker_email: None,
            status: IncidentStatus::Unassigned,
            group_id: None,
        }
    }

    /// Hand the incident to a worker as part of an assignment batch
    pub fn assign(&mut self, worker_email: &str, group_id: i32) {
        self.worker_email = Some(worker_email.to_string());
        self.status = IncidentStatus::Assigned;
        self.group_id = Some(group_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_status_display_strings() {
        assert_eq!(IncidentStatus::Unassigned.to_string(), "Unassigned");
        assert_eq!(IncidentStatus::Assigned.to_string(), "Assigned");
        assert_eq!(IncidentStatus::InProgress.to_string(), "In progress");
        assert_eq!(IncidentStatus::Invalid.to_string(), "Invalid");
        assert_eq!(IncidentStatus::Finished.to_string(), "Finished");
    }

    #[test]
    fn test_status_parse_round_trip() {
        for status in [
            IncidentStatus::Unassigned,
            IncidentStatus::Assigned,
            IncidentStatus::InProgress,
            IncidentStatus::Invalid,
            IncidentStatus::Finished,
        ] {
            assert_eq!(status.to_string().parse::<IncidentStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!("Done".parse::<IncidentStatus>().is_err());
        assert!("in progress".parse::<IncidentStatus>().is_err()); // case sensitive
        assert!("".parse::<IncidentStatus>().is_err());
    }

    #[test]
    fn test_group_transition_targets() {
        assert!(IncidentStatus::InProgress.is_group_transition_target());
        assert!(IncidentStatus::Invalid.is_group_transition_target());
        assert!(IncidentStatus::Finished.is_group_transition_target());
        assert!(!IncidentStatus::Unassigned.is_group_transition_target());
        assert!(!IncidentStatus::Assigned.is_group_transition_target());
    }

    #[test]
    fn test_new_incident_starts_unassigned() {
        let incident = Incident::new(
            "Broken projector".to_string(),
            "Projector in room 2.01 does not power on".to_string(),
            Utc::now(),
            "ada-2.01".to_string(),
            Utc::now(),
        );

        assert_eq!(incident.status, IncidentStatus::Unassigned);
        assert!(incident.worker_email.is_none());
        assert!(incident.group_id.is_none());
    }

    #[test]
    fn test_assign_sets_worker_status_and_group() {
        let mut incident = Incident::new(
            "Leaking tap".to_string(),
            "Tap drips in the second floor toilets".to_string(),
            Utc::now(),
            "ada-2.wc".to_string(),
            Utc::now(),
        );

        incident.assign("worker@campus.es", 42);

        assert_eq!(incident.status, IncidentStatus::Assigned);
        assert_eq!(incident.worker_email.as_deref(), Some("worker@campus.es"));
        assert_eq!(incident.group_id, Some(42));
    }
}
