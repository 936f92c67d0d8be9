use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InternetPackage {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// List packages, optionally filtered by name. The filter is a bound
/// parameter; the pattern wildcards are added here.
pub async fn list(db: &PgPool, search: Option<&str>) -> anyhow::Result<Vec<InternetPackage>> {
    let rows = match search.filter(|q| !q.is_empty()) {
        Some(q) => {
            sqlx::query_as::<_, InternetPackage>(
                r#"
                SELECT id, name, description, price, created_at, updated_at
                FROM internet_packages
                WHERE name ILIKE $1
                "#,
            )
            .bind(format!("%{}%", q))
            .fetch_all(db)
            .await?
        }
        None => {
            sqlx::query_as::<_, InternetPackage>(
                r#"
                SELECT id, name, description, price, created_at, updated_at
                FROM internet_packages
                "#,
            )
            .fetch_all(db)
            .await?
        }
    };
    Ok(rows)
}

pub async fn create(
    db: &PgPool,
    name: &str,
    description: &str,
    price: f64,
) -> anyhow::Result<InternetPackage> {
    let pkg = sqlx::query_as::<_, InternetPackage>(
        r#"
        INSERT INTO internet_packages (name, description, price)
        VALUES ($1, $2, $3)
        RETURNING id, name, description, price, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(price)
    .fetch_one(db)
    .await?;
    Ok(pkg)
}

/// Returns false when no package has this id.
pub async fn update(
    db: &PgPool,
    id: Uuid,
    name: &str,
    description: &str,
    price: f64,
) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE internet_packages
        SET name = $1, description = $2, price = $3, updated_at = now()
        WHERE id = $4
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(price)
    .bind(id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Returns false when no package has this id.
pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM internet_packages WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
