//! Shared integration-test server bootstrap helpers.

use axum_test::TestServer;
use emojibox_server::{create_app, AppState, Config, EmojiRegistry};
use std::sync::Arc;

pub(crate) fn test_config() -> Config {
    Config {
        port: 0,
        ..Config::default()
    }
}

pub(crate) fn test_server_for_config(config: Config, registry: Arc<EmojiRegistry>) -> TestServer {
    let state = AppState::with_registry(config, registry);
    let app = create_app(state, false);
    TestServer::new(app).expect("server")
}

pub(crate) fn test_server_for_registry(registry: Arc<EmojiRegistry>) -> TestServer {
    test_server_for_config(test_config(), registry)
}

pub(crate) fn setup_test_server() -> (TestServer, Arc<EmojiRegistry>) {
    let registry = Arc::new(EmojiRegistry::default());
    let server = test_server_for_registry(registry.clone());
    (server, registry)
}
