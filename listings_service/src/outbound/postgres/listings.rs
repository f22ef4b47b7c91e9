//! Listing storage operations

use models_listings::db::{codec, ListingRow};
use models_listings::service::{Listing, ListingDraft, ListingFilter};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::ListingsStorageError;

#[cfg(test)]
mod tests;

const SELECT_COLUMNS: &str = "id, title, location, description, price, area, status, \
     property_type, bhk, city, images, amenities, map_location, created_at, updated_at";

pub async fn insert_listing(
    pool: &PgPool,
    draft: ListingDraft,
) -> Result<Listing, ListingsStorageError> {
    let row = sqlx::query_as::<_, ListingRow>(
        r#"
        INSERT INTO listings (
            id, title, location, description, price, area, status,
            property_type, bhk, city, images, amenities, map_location
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING id, title, location, description, price, area, status,
                  property_type, bhk, city, images, amenities, map_location,
                  created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&draft.title)
    .bind(&draft.location)
    .bind(&draft.description)
    .bind(draft.price)
    .bind(draft.area)
    .bind(draft.status.to_string())
    .bind(draft.property_type.to_string())
    .bind(draft.bhk)
    .bind(&draft.city)
    .bind(codec::encode_string_list(&draft.images))
    .bind(codec::encode_string_list(&draft.amenities))
    .bind(&draft.map_location)
    .fetch_one(pool)
    .await?;

    Ok(Listing::try_from(row)?)
}

pub async fn get_listing(pool: &PgPool, id: Uuid) -> Result<Option<Listing>, ListingsStorageError> {
    let row = sqlx::query_as::<_, ListingRow>(&format!(
        "SELECT {SELECT_COLUMNS} FROM listings WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(Listing::try_from).transpose().map_err(Into::into)
}

pub async fn list_listings(
    pool: &PgPool,
    filter: &ListingFilter,
) -> Result<Vec<Listing>, ListingsStorageError> {
    let mut builder: QueryBuilder<'_, Postgres> =
        QueryBuilder::new(format!("SELECT {SELECT_COLUMNS} FROM listings WHERE TRUE"));

    if let Some(location) = &filter.location {
        let pattern = format!("%{}%", escape_like_pattern(location));
        builder.push(" AND (location ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR title ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }

    if let Some(budget) = &filter.budget {
        builder.push(" AND price >= ");
        builder.push_bind(budget.min);
        builder.push(" AND price <= ");
        builder.push_bind(budget.max);
    }

    if let Some(property_type) = filter.property_type {
        builder.push(" AND property_type = ");
        builder.push_bind(property_type.to_string());
    }

    if let Some(bhk) = filter.bhk {
        builder.push(" AND bhk = ");
        builder.push_bind(bhk);
    }

    builder.push(" ORDER BY created_at DESC");

    let rows: Vec<ListingRow> = builder.build_query_as().fetch_all(pool).await?;

    rows.into_iter()
        .map(|row| Listing::try_from(row).map_err(Into::into))
        .collect()
}

/// Escapes special characters in LIKE patterns so user input is
/// matched literally
fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}
