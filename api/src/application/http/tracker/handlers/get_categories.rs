use axum::Json;
use cutlogger_core::domain::food::entities::Category;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryView {
    pub key: Category,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCategoriesResponse {
    pub data: Vec<CategoryView>,
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = "tracker",
    summary = "List food categories",
    responses(
        (status = 200, body = GetCategoriesResponse)
    )
)]
pub async fn get_categories() -> Json<GetCategoriesResponse> {
    let data = Category::ALL
        .into_iter()
        .map(|category| CategoryView {
            key: category,
            label: category.label().to_string(),
        })
        .collect();

    Json(GetCategoriesResponse { data })
}
