use serde::Deserialize;

/// Process-wide settings, read once at startup and constant thereafter.
/// Sources: optional `config/service.toml`, overridden by environment
/// variables (`GCP_PROJECT_ID`, `GCP_LOCATION`, `MODEL`, `GCP_ACCESS_TOKEN`,
/// `PORT`).
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_project_id")]
    pub gcp_project_id: String,
    #[serde(default = "default_location")]
    pub gcp_location: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// OAuth bearer token for the Vertex AI endpoint.
    #[serde(default)]
    pub gcp_access_token: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_project_id() -> String {
    "local-dev".to_string()
}

fn default_location() -> String {
    "us-central1".to_string()
}

fn default_model() -> String {
    "claude-3-5-sonnet@20240620".to_string()
}

fn default_port() -> u16 {
    8080
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/service").required(false))
        .add_source(config::Environment::default())
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_fill_defaults_from_empty_source() {
        let settings: Settings = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.gcp_location, "us-central1");
        assert_eq!(settings.port, 8080);
        assert!(settings.gcp_access_token.is_empty());
    }
}
