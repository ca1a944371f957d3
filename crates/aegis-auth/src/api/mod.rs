//! Wire-level plumbing and models for the auth endpoints.

pub(crate) mod request;
pub(crate) mod response;

use aegis_core::{client::ApiConfiguration, ApiError};
use serde::Serialize;

use response::ApiErrorResponse;

/// Issues a POST with a JSON body against `path` under the configured base
/// URL, attaching the bearer token when one is supplied. Callers branch on
/// the response status.
pub(crate) async fn post_json(
    config: &ApiConfiguration,
    path: &str,
    bearer: Option<&str>,
    body: Option<&impl Serialize>,
) -> Result<reqwest::Response, ApiError> {
    let url = format!("{}/{}", config.base_path, path);

    let mut request = config
        .client
        .post(url)
        .header(reqwest::header::ACCEPT, "application/json")
        // Token material must never land in an intermediary cache.
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .header(reqwest::header::PRAGMA, "no-cache");

    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }
    if let Some(body) = body {
        request = request.json(body);
    }

    let response = request.send().await?;

    Ok(response)
}

/// Reads the server's rejection `message` from a non-success response,
/// degrading to the HTTP status when the body is not the expected JSON shape.
pub(crate) async fn rejection_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorResponse>().await {
        Ok(ApiErrorResponse {
            message: Some(message),
        }) => message,
        _ => status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string()),
    }
}
