//! Home Appliance Handlers

pub(crate) mod by_name;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod lookup;
pub(crate) mod update;
