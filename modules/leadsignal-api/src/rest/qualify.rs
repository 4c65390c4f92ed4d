use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde::Deserialize;
use tracing::info;

use leadsignal_common::{CompanyProfile, Product, QualificationReport};
use leadsignal_engine::Qualifier;

use super::ApiError;
use crate::AppState;

#[derive(Deserialize)]
pub struct QualifyRequest {
    #[serde(default)]
    company_name: String,
    domain: Option<String>,
    company_id: Option<String>,
    tenant_id: Option<String>,
    profile: Option<CompanyProfile>,
    #[serde(default)]
    products: Vec<Product>,
}

pub async fn api_qualify(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QualifyRequest>,
) -> Result<Json<QualificationReport>, ApiError> {
    // Missing credentials fail here, before any planning: an explicit
    // configuration error, never a silently degraded run.
    let qualifier = Qualifier::from_config(&state.config)?;

    info!(
        company = body.company_name.as_str(),
        company_id = body.company_id.as_deref().unwrap_or("-"),
        tenant_id = body.tenant_id.as_deref().unwrap_or("-"),
        "Qualification requested"
    );

    // A bare domain still gives the fit calculator something to chew on.
    let profile = body.profile.or_else(|| {
        body.domain.as_ref().map(|d| CompanyProfile {
            name: body.company_name.clone(),
            website: Some(d.clone()),
            ..Default::default()
        })
    });

    let report = qualifier
        .qualify(&body.company_name, profile, &body.products)
        .await?;

    Ok(Json(report))
}
