//! Shared integration-test server bootstrap helpers.

use axum_test::TestServer;
use pasteview_server::{create_app, AppState, Config, LanguageCatalog};

pub(crate) fn test_config() -> Config {
    Config {
        port: 0,
        ..Config::default()
    }
}

pub(crate) fn test_server_with_catalog(catalog: LanguageCatalog) -> TestServer {
    let state = AppState::new(test_config(), catalog);
    TestServer::new(create_app(state)).expect("server")
}

pub(crate) fn setup_test_server() -> TestServer {
    test_server_with_catalog(LanguageCatalog::builtin().expect("builtin catalog"))
}
