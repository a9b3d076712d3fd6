use std::collections::BTreeMap;

use actix_web::web::{self, Data};
use actix_web::{get, HttpResponse};

use super::dto::{FeatureFlagState, FeatureFlagStatus};
use super::AppState;
use crate::feature_flags::FeatureFlag;

#[get("")]
pub async fn get_all(state: Data<AppState>) -> HttpResponse {
    let flags: BTreeMap<&'static str, FeatureFlagStatus> = FeatureFlag::ALL
        .into_iter()
        .map(|flag| {
            let status = FeatureFlagStatus::new(state.flags.is_enabled(flag), flag.info());
            (flag.name(), status)
        })
        .collect();
    HttpResponse::Ok().json(flags)
}

/// Unknown names answer `enabled: false` rather than 404.
#[get("/{name}")]
pub async fn get(state: Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();
    let enabled = state.flags.is_enabled_by_name(&name);
    HttpResponse::Ok().json(FeatureFlagState { name, enabled })
}
