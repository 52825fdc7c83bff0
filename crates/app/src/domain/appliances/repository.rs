//! Home Appliances Repository

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    domain::{
        appliances::records::{ApplianceRecord, ProductKind},
        consumptions::records::EnergyConsumption,
    },
    pagination::{Page, PageRequest},
};

const FIND_APPLIANCE_BY_ID_SQL: &str = include_str!("sql/find_appliance_by_id.sql");
const FIND_APPLIANCE_BY_NAME_IGNORE_CASE_SQL: &str =
    include_str!("sql/find_appliance_by_name_ignore_case.sql");
const LIST_APPLIANCES_SQL: &str = include_str!("sql/list_appliances.sql");
const COUNT_APPLIANCES_SQL: &str = include_str!("sql/count_appliances.sql");
const UPSERT_PRODUCT_SQL: &str = include_str!("sql/upsert_product.sql");
const UPSERT_HOME_APPLIANCE_SQL: &str = include_str!("sql/upsert_home_appliance.sql");
const DELETE_APPLIANCE_SQL: &str = include_str!("sql/delete_appliance.sql");

/// Home appliance store. Reads join the attached energy consumption.
#[automock]
#[async_trait]
pub trait AppliancesRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<ApplianceRecord>, sqlx::Error>;

    /// Case-insensitive name lookup.
    async fn find_by_name_ignore_case(
        &self,
        name: &str,
    ) -> Result<Option<ApplianceRecord>, sqlx::Error>;

    async fn find_all(&self, page: PageRequest) -> Result<Page<ApplianceRecord>, sqlx::Error>;

    /// Inserts or overwrites the appliance stored under `record.id`. Only the
    /// consumption's name is written; the profile itself must already exist.
    async fn save(&self, record: ApplianceRecord) -> Result<ApplianceRecord, sqlx::Error>;

    /// Removes an appliance, returning the number of rows deleted.
    async fn delete_by_id(&self, id: &str) -> Result<u64, sqlx::Error>;
}

/// PostgreSQL-backed home appliance store.
#[derive(Debug, Clone)]
pub struct PgAppliancesRepository {
    pool: PgPool,
}

impl PgAppliancesRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppliancesRepository for PgAppliancesRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<ApplianceRecord>, sqlx::Error> {
        query_as::<Postgres, ApplianceRecord>(FIND_APPLIANCE_BY_ID_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_by_name_ignore_case(
        &self,
        name: &str,
    ) -> Result<Option<ApplianceRecord>, sqlx::Error> {
        query_as::<Postgres, ApplianceRecord>(FIND_APPLIANCE_BY_NAME_IGNORE_CASE_SQL)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_all(&self, page: PageRequest) -> Result<Page<ApplianceRecord>, sqlx::Error> {
        let total: i64 = query_scalar(COUNT_APPLIANCES_SQL)
            .fetch_one(&self.pool)
            .await?;

        let content = query_as::<Postgres, ApplianceRecord>(LIST_APPLIANCES_SQL)
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

    async fn save(&self, record: ApplianceRecord) -> Result<ApplianceRecord, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(UPSERT_PRODUCT_SQL)
            .bind(&record.id)
            .bind(ProductKind::HomeAppliance.as_str())
            .bind(&record.name)
            .bind(&record.description)
            .bind(record.price)
            .bind(record.inventory)
            .execute(&mut *tx)
            .await?;

        query(UPSERT_HOME_APPLIANCE_SQL)
            .bind(&record.id)
            .bind(record.portable)
            .bind(record.voltage)
            .bind(record.classification)
            .bind(record.energy_consumption.as_ref().map(|c| c.name.as_str()))
            .execute(&mut *tx)
            .await?;

        let saved = query_as::<Postgres, ApplianceRecord>(FIND_APPLIANCE_BY_ID_SQL)
            .bind(&record.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(saved)
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_APPLIANCE_SQL)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ApplianceRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let consumption_name: Option<String> = row.try_get("consumption_name")?;
        let consumption_power: Option<i32> = row.try_get("consumption_power")?;

        let energy_consumption = match (consumption_name, consumption_power) {
            (Some(name), Some(power)) => Some(EnergyConsumption {
                name,
                power,
                monthly_usage: row.try_get("consumption_monthly_usage")?,
                daily_use: row.try_get("consumption_daily_use")?,
                monthly_consumption_average: row
                    .try_get::<Option<Decimal>, _>("consumption_monthly_consumption_average")?,
            }),
            _ => None,
        };

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            inventory: row.try_get("inventory")?,
            portable: row.try_get("portable")?,
            voltage: row.try_get("voltage")?,
            classification: row.try_get("classification")?,
            energy_consumption,
        })
    }
}
