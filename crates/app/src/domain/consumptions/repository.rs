//! Energy Consumptions Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    domain::consumptions::records::EnergyConsumption,
    pagination::{Page, PageRequest},
};

const FIND_CONSUMPTION_BY_NAME_SQL: &str = include_str!("sql/find_consumption_by_name.sql");
const FIND_CONSUMPTION_BY_NAME_IGNORE_CASE_SQL: &str =
    include_str!("sql/find_consumption_by_name_ignore_case.sql");
const LIST_CONSUMPTIONS_SQL: &str = include_str!("sql/list_consumptions.sql");
const COUNT_CONSUMPTIONS_SQL: &str = include_str!("sql/count_consumptions.sql");
const UPSERT_CONSUMPTION_SQL: &str = include_str!("sql/upsert_consumption.sql");
const DELETE_CONSUMPTION_SQL: &str = include_str!("sql/delete_consumption.sql");

/// Energy consumption store, keyed by profile name.
#[automock]
#[async_trait]
pub trait ConsumptionsRepository: Send + Sync {
    /// Exact-key lookup.
    async fn find_by_name(&self, name: &str) -> Result<Option<EnergyConsumption>, sqlx::Error>;

    /// Case-insensitive lookup.
    async fn find_by_name_ignore_case(
        &self,
        name: &str,
    ) -> Result<Option<EnergyConsumption>, sqlx::Error>;

    async fn find_all(&self, page: PageRequest) -> Result<Page<EnergyConsumption>, sqlx::Error>;

    /// Inserts or overwrites the profile stored under its name.
    async fn save(&self, consumption: EnergyConsumption) -> Result<EnergyConsumption, sqlx::Error>;

    /// Removes a profile, returning the number of rows deleted.
    async fn delete_by_name(&self, name: &str) -> Result<u64, sqlx::Error>;
}

/// PostgreSQL-backed energy consumption store.
#[derive(Debug, Clone)]
pub struct PgConsumptionsRepository {
    pool: PgPool,
}

impl PgConsumptionsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConsumptionsRepository for PgConsumptionsRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<EnergyConsumption>, sqlx::Error> {
        query_as::<Postgres, EnergyConsumption>(FIND_CONSUMPTION_BY_NAME_SQL)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_by_name_ignore_case(
        &self,
        name: &str,
    ) -> Result<Option<EnergyConsumption>, sqlx::Error> {
        query_as::<Postgres, EnergyConsumption>(FIND_CONSUMPTION_BY_NAME_IGNORE_CASE_SQL)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_all(&self, page: PageRequest) -> Result<Page<EnergyConsumption>, sqlx::Error> {
        let total: i64 = query_scalar(COUNT_CONSUMPTIONS_SQL)
            .fetch_one(&self.pool)
            .await?;

        let content = query_as::<Postgres, EnergyConsumption>(LIST_CONSUMPTIONS_SQL)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(
            content,
            page,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn save(&self, consumption: EnergyConsumption) -> Result<EnergyConsumption, sqlx::Error> {
        query_as::<Postgres, EnergyConsumption>(UPSERT_CONSUMPTION_SQL)
            .bind(consumption.name)
            .bind(consumption.power)
            .bind(consumption.monthly_usage)
            .bind(consumption.daily_use)
            .bind(consumption.monthly_consumption_average)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CONSUMPTION_SQL)
            .bind(name)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for EnergyConsumption {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            name: row.try_get("name")?,
            power: row.try_get("power")?,
            monthly_usage: row.try_get("monthly_usage")?,
            daily_use: row.try_get("daily_use")?,
            monthly_consumption_average: row.try_get("monthly_consumption_average")?,
        })
    }
}
