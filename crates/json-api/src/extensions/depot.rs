//! Depot helper extensions.

use std::{
    any::{Any, type_name},
    sync::Arc,
};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// The shared application state injected at start-up.
    fn state_or_500(&self) -> Result<&State, StatusError> {
        self.obtain_or_500::<Arc<State>>().map(AsRef::as_ref)
    }
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!(missing = type_name::<T>(), "depot value was not injected");

            StatusError::internal_server_error()
        })
    }
}
