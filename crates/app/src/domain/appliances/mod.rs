//! Home Appliances

pub mod attributes;
pub mod data;
pub mod errors;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::AppliancesServiceError;
pub use service::*;
