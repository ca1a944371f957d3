use aegis_core::client::ApiConfiguration;

/// Helper for testing the Aegis API using wiremock.
///
/// Warning: when using `Mock::expected` ensure `server` is not dropped before the test completes,
pub async fn start_api_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, ApiConfiguration) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let config = ApiConfiguration {
        base_path: server.uri(),
        user_agent: "test-agent".to_string(),
        client: reqwest_middleware::ClientBuilder::new(reqwest::Client::new()).build(),
    };

    (server, config)
}
