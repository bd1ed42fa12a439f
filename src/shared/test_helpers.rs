#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use chrono::{Duration, Utc};
#[cfg(test)]
use fake::faker::internet::en::SafeEmail;
#[cfg(test)]
use fake::faker::lorem::en::{Sentence, Words};
#[cfg(test)]
use fake::faker::name::en::Name;
#[cfg(test)]
use fake::Fake;
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::core::error::Result;
#[cfg(test)]
use crate::features::incidents::models::Incident;
#[cfg(test)]
use crate::features::incidents::repository::IncidentRepository;
#[cfg(test)]
use crate::features::spaces::models::Space;
#[cfg(test)]
use crate::features::spaces::repository::SpaceRepository;
#[cfg(test)]
use crate::features::workers::models::Worker;
#[cfg(test)]
use crate::features::workers::repository::WorkerRepository;

/// In-memory incident store backing the service tests
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryIncidentRepository {
    incidents: Mutex<HashMap<Uuid, Incident>>,
}

#[cfg(test)]
impl InMemoryIncidentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an incident directly, bypassing the service
    pub fn insert(&self, incident: Incident) {
        self.incidents.lock().unwrap().insert(incident.id, incident);
    }

    pub fn get(&self, id: Uuid) -> Option<Incident> {
        self.incidents.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.incidents.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl IncidentRepository for InMemoryIncidentRepository {
    async fn save(&self, incident: &Incident) -> Result<()> {
        self.insert(incident.clone());
        Ok(())
    }

    async fn update(&self, incident: &Incident) -> Result<()> {
        self.insert(incident.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Incident>> {
        Ok(self.get(id))
    }

    async fn find_all(&self) -> Result<Vec<Incident>> {
        Ok(self.incidents.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_worker_email(&self, email: &str) -> Result<Vec<Incident>> {
        Ok(self
            .incidents
            .lock()
            .unwrap()
            .values()
            .filter(|i| i.worker_email.as_deref() == Some(email))
            .cloned()
            .collect())
    }

    async fn find_by_group(&self, group_id: i32) -> Result<Vec<Incident>> {
        Ok(self
            .incidents
            .lock()
            .unwrap()
            .values()
            .filter(|i| i.group_id == Some(group_id))
            .cloned()
            .collect())
    }
}

/// In-memory space inventory backing the service tests
#[cfg(test)]
#[derive(Default)]
pub struct InMemorySpaceRepository {
    spaces: Mutex<HashMap<String, Space>>,
}

#[cfg(test)]
impl InMemorySpaceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, space: Space) {
        self.spaces
            .lock()
            .unwrap()
            .insert(space.space_id.clone(), space);
    }
}

#[cfg(test)]
#[async_trait]
impl SpaceRepository for InMemorySpaceRepository {
    async fn find_by_space_id(&self, space_id: &str) -> Result<Option<Space>> {
        Ok(self.spaces.lock().unwrap().get(space_id).cloned())
    }
}

/// In-memory worker directory backing the service tests
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryWorkerRepository {
    workers: Mutex<HashMap<String, Worker>>,
}

#[cfg(test)]
impl InMemoryWorkerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, worker: Worker) {
        self.workers
            .lock()
            .unwrap()
            .insert(worker.email.clone(), worker);
    }
}

#[cfg(test)]
#[async_trait]
impl WorkerRepository for InMemoryWorkerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Worker>> {
        Ok(self.workers.lock().unwrap().get(email).cloned())
    }
}

#[cfg(test)]
pub fn sample_space(space_id: &str) -> Space {
    Space {
        space_id: space_id.to_string(),
        name: Words(2..4).fake::<Vec<String>>().join(" "),
        building: format!("{} building", Words(1..2).fake::<Vec<String>>().join(" ")),
    }
}

#[cfg(test)]
pub fn sample_worker(email: &str) -> Worker {
    Worker {
        email: email.to_string(),
        name: Name().fake(),
    }
}

#[cfg(test)]
pub fn sample_worker_email() -> String {
    SafeEmail().fake()
}

#[cfg(test)]
pub fn sample_incident(space_id: &str) -> Incident {
    Incident::new(
        Sentence(3..6).fake(),
        Sentence(8..16).fake(),
        Utc::now(),
        space_id.to_string(),
        Utc::now() + Duration::days(7),
    )
}
