use models::{Category, HealthResponse};
use utoipa::openapi::server::Server;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct CategoryRequestDoc { pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct CategoryResponseDoc { pub code: String, pub message: String, pub data: Category }

#[derive(ToSchema)]
pub struct CategoryListResponseDoc { pub code: String, pub message: String, pub data: Vec<Category> }

#[derive(ToSchema)]
pub struct MessageResponseDoc { pub code: String, pub message: String }

#[derive(OpenApi)]
#[openapi(
    info(title = "Categories API", version = "1.0"),
    paths(
        crate::routes::health::health,
        crate::routes::categories::list,
        crate::routes::categories::get,
        crate::routes::categories::create,
        crate::routes::categories::update,
        crate::routes::categories::delete,
    ),
    components(
        schemas(
            Category,
            HealthResponse,
            CategoryRequestDoc,
            CategoryResponseDoc,
            CategoryListResponseDoc,
            MessageResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "categories")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Document with a server entry pointing at the mount prefix.
    pub fn with_base_path(base_path: &str) -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        if !base_path.is_empty() {
            doc.servers = Some(vec![Server::new(base_path)]);
        }
        doc
    }
}
