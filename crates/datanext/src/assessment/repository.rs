use super::criteria::{CriterionDefinition, CriterionId};

/// Storage abstraction for the tunable criteria registry, so the service
/// module can be exercised in isolation.
pub trait CriteriaRepository: Send + Sync {
    fn list(&self) -> Result<Vec<CriterionDefinition>, RepositoryError>;
    fn fetch(&self, id: CriterionId) -> Result<Option<CriterionDefinition>, RepositoryError>;
    fn set_weight(&self, id: CriterionId, weight: u8) -> Result<CriterionDefinition, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("criterion not found")]
    NotFound,
    #[error("weight {0} is outside the tunable range")]
    InvalidWeight(u8),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
