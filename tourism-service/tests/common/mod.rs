use std::sync::Arc;

use auth::Authenticator;
use auth::ManualClock;
use chrono::Duration;
use chrono::Utc;
use tourism_service::domain::account::service::AuthService;
use tourism_service::domain::spot::service::SpotService;
use tourism_service::inbound::http::router::create_router;
use tourism_service::outbound::repositories::InMemoryCredentialStore;
use tourism_service::outbound::repositories::InMemorySpotRepository;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub clock: Arc<ManualClock>,
    pub spot_repository: Arc<InMemorySpotRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let clock = Arc::new(ManualClock::new(Utc::now()));
        let authenticator = Arc::new(Authenticator::with_clock(TEST_SECRET, clock.clone()));

        let credential_store = Arc::new(InMemoryCredentialStore::new());
        let spot_repository = Arc::new(InMemorySpotRepository::seeded());

        let auth_service = Arc::new(AuthService::new(
            credential_store,
            authenticator,
            Duration::minutes(30),
            Duration::minutes(15),
        ));
        let spot_service = Arc::new(SpotService::new(Arc::clone(&spot_repository)));

        let router = create_router(auth_service, spot_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create reqwest client"),
            clock,
            spot_repository,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register an account and return the response
    pub async fn register(&self, username: &str, email: &str, password: &str) -> reqwest::Response {
        self.post("/auth/register")
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in through the form endpoint and return the response
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/auth/login")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register an account and return its access token
    pub async fn register_token(&self, username: &str, password: &str) -> String {
        let response = self
            .register(username, &format!("{}@example.com", username), password)
            .await;
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["access_token"]
            .as_str()
            .expect("Missing access token")
            .to_string()
    }
}
