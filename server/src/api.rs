use crate::AppRouter;
use axum::Router;
use enum_iterator::{all, Sequence};

pub mod docs;
pub mod passphrase;

/// All API modules must implement ApiModule trait:
pub trait ApiModule {
    fn main() -> AppRouter;
    fn to_string(&self) -> String;
    fn router(&self) -> AppRouter;
}

/// Enumeration of all top-level modules:
#[derive(Debug, PartialEq, Sequence, Clone)]
pub enum APIModule {
    Passphrase,
    Docs,
}
impl ApiModule for APIModule {
    fn main() -> AppRouter {
        // Adds all routes for all modules in APIModule:
        let mut app = Router::new();
        for m in all::<APIModule>() {
            app = app.merge(m.router());
        }
        app
    }
    fn router(&self) -> AppRouter {
        match self {
            APIModule::Passphrase => passphrase::router(),
            APIModule::Docs => docs::router(),
        }
    }
    fn to_string(&self) -> String {
        format!("{:?}", self).to_lowercase()
    }
}

pub fn router() -> AppRouter {
    APIModule::main()
}
