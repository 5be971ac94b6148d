use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use datanext::assessment::{
    decision_criteria, CriteriaRepository, CriterionDefinition, CriterionId, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local criteria registry seeded with the default decision model.
#[derive(Debug)]
pub(crate) struct InMemoryCriteriaRegistry {
    criteria: Mutex<Vec<CriterionDefinition>>,
}

impl Default for InMemoryCriteriaRegistry {
    fn default() -> Self {
        Self {
            criteria: Mutex::new(decision_criteria()),
        }
    }
}

impl InMemoryCriteriaRegistry {
    fn guard(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, Vec<CriterionDefinition>>, RepositoryError> {
        self.criteria
            .lock()
            .map_err(|_| RepositoryError::Unavailable("criteria registry poisoned".to_string()))
    }
}

impl CriteriaRepository for InMemoryCriteriaRegistry {
    fn list(&self) -> Result<Vec<CriterionDefinition>, RepositoryError> {
        Ok(self.guard()?.clone())
    }

    fn fetch(&self, id: CriterionId) -> Result<Option<CriterionDefinition>, RepositoryError> {
        Ok(self
            .guard()?
            .iter()
            .find(|criterion| criterion.id == id)
            .cloned())
    }

    fn set_weight(
        &self,
        id: CriterionId,
        weight: u8,
    ) -> Result<CriterionDefinition, RepositoryError> {
        let mut criteria = self.guard()?;
        let criterion = criteria
            .iter_mut()
            .find(|criterion| criterion.id == id)
            .ok_or(RepositoryError::NotFound)?;
        criterion.weight = weight;
        Ok(criterion.clone())
    }
}
