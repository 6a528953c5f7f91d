use crate::api::{APIModule, ApiModule};
use crate::{AppMethodRouter, AppRouter, API_PREFIX};
use axum::response::Redirect;
use axum::routing::any;
use axum::Router;

/// Mounts `method_router` at `/api/<module>/<path>/`.
pub fn route(module: APIModule, path: &str, method_router: AppMethodRouter) -> AppRouter {
    let p = match path.trim_matches('/') {
        "" => format!("{API_PREFIX}/{}/", module.to_string()),
        p2 => format!("{API_PREFIX}/{}/{p2}/", module.to_string()),
    };
    // Redirect all URLs missing the final forward-slash /
    let redirect = Redirect::permanent(&p);
    Router::new()
        .route(&p, method_router)
        .route(p.trim_end_matches('/'), any(move || async move { redirect }))
}
