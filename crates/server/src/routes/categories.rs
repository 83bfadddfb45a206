use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::ApiResponse;
use models::Category;
use tracing::info;

use crate::{errors::ApiError, routes::AppState};

type Envelope<T> = (StatusCode, Json<ApiResponse<T>>);

/// Signed decimal integer; anything else is an invalid id.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::InvalidId)
}

/// Decode the first JSON value of the body as a category, regardless of
/// `Content-Type`. Bytes after that value are ignored; `null` is an empty record.
pub fn parse_category(body: &[u8]) -> Result<Category, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Category>>();
    match values.next() {
        Some(Ok(candidate)) => Ok(candidate.unwrap_or_default()),
        _ => Err(ApiError::InvalidRequest),
    }
}

#[utoipa::path(
    get, path = "/categories", tag = "categories",
    responses(
        (status = 200, description = "All categories", body = crate::openapi::CategoryListResponseDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Envelope<Vec<Category>> {
    let list = state.categories.list().await;
    info!(count = list.len(), "list categories");
    (StatusCode::OK, Json(ApiResponse::success_with("Success get all categories", list)))
}

#[utoipa::path(
    get, path = "/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::CategoryResponseDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::MessageResponseDoc),
        (status = 500, description = "Category not found", body = crate::openapi::MessageResponseDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Envelope<Category>, ApiError> {
    let id = parse_id(&raw_id)?;
    let category = state.categories.get(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success_with("Success get category by id", category))))
}

#[utoipa::path(
    post, path = "/categories", tag = "categories",
    request_body = crate::openapi::CategoryRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CategoryResponseDoc),
        (status = 400, description = "Invalid request body or no id left to assign", body = crate::openapi::MessageResponseDoc)
    )
)]
pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<Envelope<Category>, ApiError> {
    let candidate = parse_category(&body)?;
    let stored = state.categories.insert(candidate).await?;
    info!(id = stored.id, name = %stored.name, "created category");
    Ok((StatusCode::CREATED, Json(ApiResponse::success_with("Success insert new category", stored))))
}

#[utoipa::path(
    put, path = "/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    request_body = crate::openapi::CategoryRequestDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CategoryResponseDoc),
        (status = 400, description = "Invalid id or body", body = crate::openapi::MessageResponseDoc),
        (status = 500, description = "Category not found", body = crate::openapi::MessageResponseDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Envelope<Category>, ApiError> {
    let id = parse_id(&raw_id)?;
    // The path id wins over any id in the body.
    let candidate = parse_category(&body)?.with_id(id);
    let updated = state.categories.update(candidate).await?;
    info!(id = updated.id, "updated category");
    Ok((StatusCode::OK, Json(ApiResponse::success_with("Success update existing category", updated))))
}

#[utoipa::path(
    delete, path = "/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageResponseDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::MessageResponseDoc),
        (status = 500, description = "Category not found", body = crate::openapi::MessageResponseDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Envelope<()>, ApiError> {
    let id = parse_id(&raw_id)?;
    let deleted = state.categories.delete(id).await?;
    info!(id = deleted, "deleted category");
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(format!("Success delete category with id {deleted}"))),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_signed_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-7").unwrap(), -7);
        assert_eq!(parse_id("+3").unwrap(), 3);
        assert_eq!(parse_id("0").unwrap(), 0);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        for raw in ["abc", "", "1.5", " 1", "99999999999999999999"] {
            assert!(matches!(parse_id(raw), Err(ApiError::InvalidId)), "{raw:?}");
        }
    }

    #[test]
    fn parse_category_rejects_empty_and_malformed() {
        assert!(matches!(parse_category(b""), Err(ApiError::InvalidRequest)));
        assert!(matches!(parse_category(b"{\"name\":"), Err(ApiError::InvalidRequest)));
        assert!(matches!(parse_category(b"{\"id\":\"x\"}"), Err(ApiError::InvalidRequest)));
    }

    #[test]
    fn parse_category_reads_first_value_only() {
        let c = parse_category(br#"{"name":"a"} junk"#).unwrap();
        assert_eq!(c, Category::new(0, "a", ""));
        let c = parse_category(b"  {\"id\":2}\n{\"id\":3}").unwrap();
        assert_eq!(c.id, 2);
    }

    #[test]
    fn parse_category_null_is_empty_record() {
        assert_eq!(parse_category(b"null").unwrap(), Category::default());
        assert!(matches!(parse_category(b"   "), Err(ApiError::InvalidRequest)));
        assert!(matches!(parse_category(b"[1]"), Err(ApiError::InvalidRequest)));
    }

    #[test]
    fn parse_category_fills_defaults() {
        let c = parse_category(br#"{"name":"Books","description":"All books"}"#).unwrap();
        assert_eq!(c, Category::new(0, "Books", "All books"));
    }
}
