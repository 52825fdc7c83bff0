//! Energy Consumption Profiles

pub mod data;
pub mod errors;
pub mod peer;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::ConsumptionsServiceError;
pub use service::*;
