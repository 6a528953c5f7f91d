use crate::{
    api::{passphrase, APIModule, ApiModule},
    AppRouter, API_PREFIX,
};
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use wordpass_dto::passphrase::{PassphraseResponse, WordListInfo};

#[derive(OpenApi)]
#[openapi(
    paths(passphrase::generate_handler, passphrase::words_handler),
    components(schemas(PassphraseResponse, WordListInfo))
)]
pub struct ApiDoc;

/// Swagger UI at `/api/docs/ui`, document at `/api/docs/openapi.json`.
pub fn router() -> AppRouter {
    let base = format!("{API_PREFIX}/{}", APIModule::Docs.to_string());
    Router::new().merge(
        SwaggerUi::new(format!("{base}/ui")).url(format!("{base}/openapi.json"), ApiDoc::openapi()),
    )
}
