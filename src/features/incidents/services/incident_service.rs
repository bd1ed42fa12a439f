use std::sync::Arc;

use rand::Rng;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::incidents::dtos::{
    AssignIncidentsDto, CreateIncidentDto, IncidentResponseDto,
};
use crate::features::incidents::models::{Incident, IncidentStatus};
use crate::features::incidents::repository::IncidentRepository;
use crate::features::spaces::repository::SpaceRepository;
use crate::features::workers::repository::WorkerRepository;

/// Group ids are drawn uniformly from `0..GROUP_ID_RANGE`
const GROUP_ID_RANGE: i32 = 1_000_000;

/// Service for incident operations
pub struct IncidentService {
    incidents: Arc<dyn IncidentRepository>,
    spaces: Arc<dyn SpaceRepository>,
    workers: Arc<dyn WorkerRepository>,
}

impl IncidentService {
    pub fn new(
        incidents: Arc<dyn IncidentRepository>,
        spaces: Arc<dyn SpaceRepository>,
        workers: Arc<dyn WorkerRepository>,
    ) -> Self {
        Self {
            incidents,
            spaces,
            workers,
        }
    }

    /// Report a new incident against a campus space
    pub async fn create_incident(&self, dto: CreateIncidentDto) -> Result<IncidentResponseDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let space = self
            .spaces
            .find_by_space_id(&dto.space_id)
            .await?
            .ok_or_else(|| {
                tracing::error!(
                    "Space '{}' not found, aborting incident creation",
                    dto.space_id
                );
                AppError::NotFound(format!("Space '{}' not found", dto.space_id))
            })?;

        tracing::info!(
            "Creating incident '{}' in space '{}' (building {})",
            dto.name,
            space.name,
            space.building
        );

        let incident = Incident::new(
            dto.name,
            dto.description,
            dto.reported_at,
            dto.space_id,
            dto.due_at,
        );
        self.incidents.save(&incident).await?;

        Ok(incident.into())
    }

    /// List every incident in the system
    pub async fn list_all(&self) -> Result<Vec<IncidentResponseDto>> {
        tracing::info!("Listing all incidents");

        let incidents = self.incidents.find_all().await?;

        Ok(incidents.into_iter().map(|i| i.into()).collect())
    }

    /// List incidents assigned to a worker
    pub async fn list_by_worker(&self, email: &str) -> Result<Vec<IncidentResponseDto>> {
        tracing::info!("Listing incidents assigned to {}", email);

        let incidents = self.incidents.find_by_worker_email(email).await?;

        Ok(incidents.into_iter().map(|i| i.into()).collect())
    }

    /// Get a single incident by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<IncidentResponseDto> {
        self.incidents
            .find_by_id(id)
            .await?
            .map(|i| i.into())
            .ok_or_else(|| AppError::NotFound(format!("Incident '{}' not found", id)))
    }

    /// Assign a batch of incidents to a worker under one shared group id.
    ///
    /// The whole batch is checked before anything is written: the worker
    /// must exist and every incident must exist and still be unassigned.
    /// Updates are then persisted one at a time, so there is no isolation
    /// from concurrent writers between the check and the writes.
    pub async fn assign_incidents(&self, dto: AssignIncidentsDto) -> Result<i32> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        tracing::info!(
            "Assigning {} incident(s) to {}",
            dto.incident_ids.len(),
            dto.worker_email
        );

        if self
            .workers
            .find_by_email(&dto.worker_email)
            .await?
            .is_none()
        {
            tracing::error!(
                "'{}' is not a registered worker, aborting assignment",
                dto.worker_email
            );
            return Err(AppError::NotFound(format!(
                "'{}' is not a registered worker",
                dto.worker_email
            )));
        }

        let mut batch = Vec::with_capacity(dto.incident_ids.len());
        for id in &dto.incident_ids {
            let incident = self.incidents.find_by_id(*id).await?.ok_or_else(|| {
                tracing::error!("Incident '{}' not found, aborting assignment", id);
                AppError::NotFound(format!("Incident '{}' not found", id))
            })?;

            if incident.status != IncidentStatus::Unassigned {
                tracing::error!("Incident '{}' is already assigned, aborting assignment", id);
                return Err(AppError::Conflict(format!(
                    "Incident '{}' is already assigned",
                    id
                )));
            }

            batch.push(incident);
        }

        let group_id = rand::thread_rng().gen_range(0..GROUP_ID_RANGE);

        for mut incident in batch {
            incident.assign(&dto.worker_email, group_id);
            self.incidents.update(&incident).await?;
        }

        tracing::info!(
            "Assigned group {} to worker {}",
            group_id,
            dto.worker_email
        );

        Ok(group_id)
    }

    /// Move every incident in a group to a new status.
    ///
    /// Only "In progress", "Invalid" and "Finished" are accepted as targets;
    /// the unassigned/assigned states are reserved for creation and
    /// assignment.
    pub async fn change_group_status(&self, group_id: i32, new_status: &str) -> Result<()> {
        tracing::info!(
            "Changing incidents of group {} to status '{}'",
            group_id,
            new_status
        );

        let status = new_status.parse::<IncidentStatus>().map_err(|e| {
            tracing::error!("Rejected group status change: {}", e);
            e
        })?;

        if !status.is_group_transition_target() {
            tracing::error!(
                "'{}' is not a valid target for a group status change",
                status
            );
            return Err(AppError::Validation(format!(
                "'{}' is not a valid target for a group status change",
                status
            )));
        }

        let incidents = self.incidents.find_by_group(group_id).await?;
        if incidents.is_empty() {
            tracing::error!("No incidents found in group {}", group_id);
            return Err(AppError::NotFound(format!(
                "No incidents found in group {}",
                group_id
            )));
        }

        for mut incident in incidents {
            incident.status = status;
            self.incidents.update(&incident).await?;
        }

        tracing::info!("Incidents of group {} updated to '{}'", group_id, status);

        Ok(())
    }
}
