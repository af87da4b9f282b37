//! Repository for the `persons` table.

use sqlx::PgPool;

use dormhub_core::types::DbId;

use crate::models::person::{CreatePerson, Person, UpdatePerson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, company_name, personal_phone, company_phone, email, \
    legal_id, country, address, is_approve, approved_by, approved_time, \
    is_active, inactive_by, inactive_time, created_by, created_time, updated_by, updated_time";

/// Provides CRUD operations for persons (tenants/guests).
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO persons
                (name, company_name, personal_phone, company_phone, email,
                 legal_id, country, address, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(&input.company_name)
            .bind(&input.personal_phone)
            .bind(&input.company_phone)
            .bind(&input.email)
            .bind(&input.legal_id)
            .bind(&input.country)
            .bind(&input.address)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// True if an active person (other than `exclude`, when given) already
    /// uses this personal phone or email.
    pub async fn contact_exists(
        pool: &PgPool,
        personal_phone: &str,
        email: &str,
        exclude: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM persons
             WHERE (personal_phone = $1 OR email = $2)
               AND is_active
               AND ($3::bigint IS NULL OR id <> $3))",
        )
        .bind(personal_phone)
        .bind(email)
        .bind(exclude)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// True if an active person with the given id exists.
    pub async fn exists_active(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM persons WHERE id = $1 AND is_active)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Find an active person by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons WHERE id = $1 AND is_active");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active persons, optionally filtered by a substring match on
    /// name, personal phone, or email.
    pub async fn list(pool: &PgPool, search: Option<&str>) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM persons
             WHERE is_active
               AND ($1::text IS NULL
                    OR name ILIKE '%' || $1 || '%'
                    OR personal_phone ILIKE '%' || $1 || '%'
                    OR email ILIKE '%' || $1 || '%')
             ORDER BY created_time DESC"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(search)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a person's mutable fields. Returns `None` if no active row
    /// with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE persons SET name = $2, company_name = $3, personal_phone = $4,
                    company_phone = $5, email = $6, legal_id = $7, country = $8,
                    address = $9, updated_by = $10, updated_time = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.company_name)
            .bind(&input.personal_phone)
            .bind(&input.company_phone)
            .bind(&input.email)
            .bind(&input.legal_id)
            .bind(&input.country)
            .bind(&input.address)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a person. Returns `true` if an active row was marked.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE persons SET is_active = FALSE, inactive_by = $2, inactive_time = NOW()
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
