//! Classification and scoring engine for migrating legacy enterprise
//! reports to modern analytics targets.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

pub use error::AppError;
