use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify the target and behavior of the
/// Aegis client. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use aegis_core::{ClientSettings, DeviceType};
/// let settings = ClientSettings {
///     api_url: "https://api.aegisapp.io".to_string(),
///     user_agent: "Aegis Rust-SDK".to_string(),
///     device_type: DeviceType::SDK,
///     client_version: None,
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The api url of the targeted Aegis instance. Defaults to `https://api.aegisapp.io`
    pub api_url: String,
    /// The user_agent to send to Aegis. Defaults to `Aegis Rust-SDK`
    pub user_agent: String,
    /// Device type to send to Aegis. Defaults to SDK
    pub device_type: DeviceType,
    /// Aegis client version to send to Aegis.
    pub client_version: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.aegisapp.io".into(),
            user_agent: "Aegis Rust-SDK".into(),
            device_type: DeviceType::SDK,
            client_version: None,
        }
    }
}

#[expect(non_camel_case_types, missing_docs)]
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub enum DeviceType {
    Android = 0,
    iOS = 1,
    SDK = 2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_deserialize_with_defaults() {
        let settings: ClientSettings =
            serde_json::from_str(r#"{"apiUrl": "https://api.eu.aegisapp.io"}"#).unwrap();

        assert_eq!(settings.api_url, "https://api.eu.aegisapp.io");
        assert_eq!(settings.user_agent, "Aegis Rust-SDK");
        assert_eq!(settings.device_type, DeviceType::SDK);
    }
}
