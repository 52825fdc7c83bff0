//! In-memory stand-in for a driver-reported database error.

use std::{borrow::Cow, error::Error as StdError, fmt};

use sqlx::error::{DatabaseError, ErrorKind};

#[derive(Debug)]
pub(crate) struct FakeDatabaseError {
    code: &'static str,
    constraint: Option<&'static str>,
}

impl FakeDatabaseError {
    pub(crate) fn unique_violation(constraint: &'static str) -> sqlx::Error {
        Self {
            code: "23505",
            constraint: Some(constraint),
        }
        .into_sqlx()
    }

    pub(crate) fn check_violation(constraint: &'static str) -> sqlx::Error {
        Self {
            code: "23514",
            constraint: Some(constraint),
        }
        .into_sqlx()
    }

    pub(crate) fn numeric_overflow() -> sqlx::Error {
        Self {
            code: "22003",
            constraint: None,
        }
        .into_sqlx()
    }

    fn into_sqlx(self) -> sqlx::Error {
        sqlx::Error::Database(Box::new(self))
    }
}

impl fmt::Display for FakeDatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "database error {}", self.code)
    }
}

impl StdError for FakeDatabaseError {}

impl DatabaseError for FakeDatabaseError {
    fn message(&self) -> &str {
        "database error"
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.code))
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn constraint(&self) -> Option<&str> {
        self.constraint
    }

    fn kind(&self) -> ErrorKind {
        match self.code {
            "23505" => ErrorKind::UniqueViolation,
            "23514" => ErrorKind::CheckViolation,
            _ => ErrorKind::Other,
        }
    }
}
