use std::sync::Arc;

use mockito::ServerGuard;
use recipe_book::client::{ApiCredentials, RecipeClient};

#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-key";

/// A recipe client wired to an isolated mock API server.
///
/// Each test owns its own server, so tests are independent and need no
/// shared credentials or serialization.
pub struct TestEnvironment {
    pub server: ServerGuard,
    pub client: Arc<RecipeClient>,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        let server = mockito::Server::new_async().await;
        let client = Arc::new(RecipeClient::new(
            server.url(),
            ApiCredentials::new(TEST_API_KEY.to_string()),
        ));
        Self { server, client }
    }
}

#[allow(dead_code)]
pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
