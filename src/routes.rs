use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::error::ApiError;
use crate::form::{FormController, FormSubmission};
use crate::languages::{language_options, LanguageOption, TargetLanguage};
use crate::render::render_page;
use crate::state::AppState;
use crate::translate::{TranslateRequest, TranslateResponse, TranslationRequest};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Page
        .route("/", get(index).post(submit_form))

        // JSON API
        .route("/api/health", get(health_check))
        .route("/api/languages", get(list_languages))
        .route("/api/translate", post(translate))
}

/// Full application with middleware, ready to serve
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(render_page(&FormController::blank(TargetLanguage::default())))
}

async fn submit_form(
    State(state): State<AppState>,
    submission: Result<Form<FormSubmission>, FormRejection>,
) -> Html<String> {
    let view = match submission {
        Ok(Form(submission)) => state.form_controller().submit(submission).await,
        Err(rejection) => {
            warn!("Unreadable form submission: {}", rejection);
            FormController::rejected(&rejection.body_text())
        }
    };
    Html(render_page(&view))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.config.llm.model,
        "api_key_configured": state.api_key_configured
    }))
}

async fn list_languages() -> Json<Vec<LanguageOption>> {
    Json(language_options())
}

async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let language: TargetLanguage = payload.target_language.parse()?;
    TranslationRequest::new(&payload.text, language)?;
    let translated_text = state.translator.translate(&payload.text, language).await?;

    Ok(Json(TranslateResponse {
        translated_text,
        target_language: language.canonical_name().to_string(),
    }))
}
