//! Home appliance registry domain, persistence, and application wiring.

pub mod context;
pub mod database;
pub mod domain;
pub mod identifiers;
pub mod pagination;
pub mod seed;

#[cfg(test)]
mod test;

pub use domain::{appliances, consumptions};
