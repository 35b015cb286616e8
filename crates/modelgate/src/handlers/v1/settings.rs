//! LLM provider settings handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use modelgate_types::{
    ProviderSettings, ResolvedModelResponse, SettingsResponse, StatusResponse,
    UpdateProviderRequest, UpdateSettingsRequest,
};
use tracing::error;

use crate::response;
use crate::server::AppState;
use crate::settings::{ProviderSelection, SAVED_MESSAGE};

/// GET /api/v1/settings/llm-provider
pub async fn get_llm_provider(State(state): State<AppState>) -> Response {
    match state.settings.load().await {
        Ok(selection) => Json(selection.view()).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to load settings");
            response::internal_error("Failed to load settings").into_response()
        }
    }
}

/// PUT /api/v1/settings/llm-provider
///
/// The reply echoes the selection exactly as a later GET will return it.
pub async fn put_llm_provider(
    State(state): State<AppState>,
    payload: Result<Json<UpdateSettingsRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return response::rejection(rejection).into_response(),
    };
    let selection = ProviderSelection::restore(Some(req.provider.as_str()), req.model.as_deref());

    if let Err(resp) = save(&state, &selection).await {
        return resp;
    }

    Json(SettingsResponse {
        settings: ProviderSettings::from(&selection),
        message: SAVED_MESSAGE.to_string(),
    })
    .into_response()
}

/// POST /api/update-llm-provider
///
/// Provider-only update used by the provider dropdown.
pub async fn update_llm_provider(
    State(state): State<AppState>,
    payload: Result<Json<UpdateProviderRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return response::rejection(rejection).into_response(),
    };
    let selection = ProviderSelection::restore(Some(req.provider.as_str()), None);

    if let Err(resp) = save(&state, &selection).await {
        return resp;
    }
    Json(StatusResponse::ok()).into_response()
}

/// GET /api/v1/llm-provider/resolved
///
/// Resolves the saved selection against the server's credentials, or
/// `LLM_PROVIDER`/`LLM_MODEL` when nothing has been saved. The key itself
/// is never returned.
pub async fn resolved_llm_provider(State(state): State<AppState>) -> Response {
    let saved = match state.settings.load_saved().await {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "Failed to load settings");
            return response::internal_error("Failed to load settings").into_response();
        }
    };

    let resolved = match &saved {
        Some(selection) => state.resolver.resolve_selection(selection),
        None => state.resolver.resolve(),
    };
    match resolved {
        Ok(resolved) => Json(ResolvedModelResponse {
            provider: resolved.provider.to_string(),
            model: resolved.model,
            credential_var: resolved.credential_var.to_string(),
        })
        .into_response(),
        Err(e) => response::internal_error(e.to_string()).into_response(),
    }
}

async fn save(state: &AppState, selection: &ProviderSelection) -> Result<(), Response> {
    state.settings.save(selection).await.map_err(|e| {
        error!(error = %e, "Failed to save settings");
        response::internal_error("Failed to save settings").into_response()
    })
}
