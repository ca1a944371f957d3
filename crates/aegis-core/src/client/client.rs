use std::sync::Arc;

use reqwest::header::{self, HeaderValue};

use super::internal::InternalClient;
use crate::client::{client_settings::ClientSettings, internal::ApiConfiguration};
use crate::platform::ClientPlatform;

/// The main struct to interact with the Aegis SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance. This is required to share the client across the host
    // app's call sites. For this to happen, any mutable state needs to be behind an Arc,
    // ideally as part of the existing [`InternalClient`] struct.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new Aegis client wired to the given platform collaborators.
    pub fn new(settings_input: Option<ClientSettings>, platform: ClientPlatform) -> Self {
        let settings = settings_input.unwrap_or_default();

        let headers = build_default_headers(&settings);

        let http_client = new_http_client_builder()
            .default_headers(headers)
            .build()
            .expect("HTTP Client build should not fail");

        let http_client = reqwest_middleware::ClientBuilder::new(http_client).build();

        let api = ApiConfiguration {
            base_path: settings.api_url,
            user_agent: settings.user_agent,
            client: http_client,
        };

        Self {
            internal: Arc::new(InternalClient {
                api_configuration: Arc::new(api),
                platform,
                credential_write_lock: tokio::sync::Mutex::new(()),
            }),
        }
    }
}

fn new_http_client_builder() -> reqwest::ClientBuilder {
    #[allow(unused_mut)]
    let mut client_builder = reqwest::Client::builder();

    // Enforce HTTPS for all requests in non-debug builds
    #[cfg(not(debug_assertions))]
    {
        client_builder = client_builder.https_only(true);
    }

    client_builder
}

/// Build default headers for the Aegis HttpClient
fn build_default_headers(settings: &ClientSettings) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();

    // Handle optional headers

    if let Some(version) = &settings.client_version {
        headers.append(
            "Aegis-Client-Version",
            HeaderValue::from_str(version).expect("Version should be a valid header value"),
        );
    }

    // Handle required headers

    headers.append(
        "Device-Type",
        HeaderValue::from_str(&(settings.device_type as u8).to_string())
            .expect("All numbers are valid ASCII"),
    );

    headers.append(
        reqwest::header::USER_AGENT,
        HeaderValue::from_str(&settings.user_agent)
            .expect("User agent should be a valid header value"),
    );

    headers
}
