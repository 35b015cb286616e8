use axum::Json;
use modelgate_types::VersionResponse;

use crate::build_info;

/// GET /version
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        name: build_info::NAME.to_string(),
        version: build_info::VERSION.to_string(),
    })
}
