mod database_error;

pub(crate) use database_error::FakeDatabaseError;
pub(crate) use db::TestDb;
