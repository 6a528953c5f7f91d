use crate::{
    api::APIModule,
    app_state::SharedState,
    response::{AppError, AppJson, JsonResult},
    routing::route,
    AppMethodRouter, AppRouter,
};
use axum::{
    extract::State,
    http::{header, Uri},
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::debug;
use wordpass_common::{generate_passphrase_with, OsRandom};
use wordpass_dto::passphrase::{PassphraseResponse, WordListInfo};

pub fn router() -> AppRouter {
    Router::new().merge(generate()).merge(words())
}

fn passphrase_route(path: &str, method_router: AppMethodRouter) -> AppRouter {
    route(APIModule::Passphrase, path, method_router)
}

#[utoipa::path(
    get,
    path = "/api/passphrase/",
    responses(
        (status = OK, description = "A fresh passphrase", body = PassphraseResponse),
        (status = SERVICE_UNAVAILABLE, description = "Secure random source unavailable")
    )
)]
pub async fn generate_handler(
    State(state): State<SharedState>,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let passphrase = generate_passphrase_with(&mut OsRandom, &state.words)
        .map_err(|e| AppError::from(e).with_uri(&uri))?;
    debug!("Generated passphrase");
    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        AppJson(PassphraseResponse { passphrase }),
    ))
}

fn generate() -> AppRouter {
    passphrase_route("/", get(generate_handler))
}

#[utoipa::path(
    get,
    path = "/api/passphrase/words/",
    responses(
        (status = OK, description = "The candidate word list", body = WordListInfo)
    )
)]
pub async fn words_handler(State(state): State<SharedState>) -> JsonResult<WordListInfo> {
    Ok(AppJson(WordListInfo::from(&state.words)))
}

fn words() -> AppRouter {
    passphrase_route("/words", get(words_handler))
}
