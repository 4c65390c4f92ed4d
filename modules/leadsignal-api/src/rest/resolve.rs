use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde::Deserialize;
use tracing::info;

use leadsignal_common::CompanyIdentity;
use leadsignal_resolver::Resolver;

use super::ApiError;
use crate::AppState;

#[derive(Deserialize)]
pub struct ResolveRequest {
    #[serde(default)]
    url: String,
    company_name: Option<String>,
}

pub async fn api_resolve(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ResolveRequest>,
) -> Result<Json<CompanyIdentity>, ApiError> {
    let resolver = Resolver::from_config(&state.config)?;

    info!(url = body.url.as_str(), "Identity resolution requested");
    let identity = resolver
        .resolve(&body.url, body.company_name.as_deref())
        .await?;

    Ok(Json(identity))
}
