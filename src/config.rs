use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub mattermost: MattermostConfig,
    pub webex: WebexConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct MattermostConfig {
    /// Base URL of the Mattermost server, e.g. "https://chat.example.com"
    pub base_url: String,
    /// Bot or personal access token used for REST calls
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebexConfig {
    /// Webex site host, e.g. "example.webex.com" (no scheme, no path)
    pub site_host: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl WebexConfig {
    /// Whether the administrator-supplied Webex settings are usable.
    ///
    /// Starting a meeting requires a bare site host; a value carrying a
    /// scheme or a path is a full URL pasted in by mistake.
    pub fn is_valid(&self) -> bool {
        let host = self.site_host.trim();
        !host.is_empty() && !host.contains("://") && !host.contains('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn webex(site_host: &str) -> WebexConfig {
        WebexConfig {
            site_host: site_host.to_string(),
        }
    }

    #[test]
    fn bare_site_host_is_valid() {
        assert!(webex("example.webex.com").is_valid());
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert!(webex("  example.webex.com ").is_valid());
    }

    #[test]
    fn empty_site_host_is_invalid() {
        assert!(!webex("").is_valid());
        assert!(!webex("   ").is_valid());
    }

    #[test]
    fn scheme_or_path_is_invalid() {
        assert!(!webex("https://example.webex.com").is_valid());
        assert!(!webex("example.webex.com/meet").is_valid());
    }

    #[test]
    fn load_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webex-bridge.toml");
        std::fs::write(
            &path,
            r#"
            [service]
            name = "webex-bridge"

            [service.http]
            bind = "127.0.0.1"
            port = 8087

            [mattermost]
            base_url = "https://chat.example.com"
            token = "secret"

            [webex]
            site_host = "example.webex.com"
            "#,
        )
        .unwrap();

        let cfg = Config::load(dir.path().join("webex-bridge").to_str().unwrap()).unwrap();

        assert_eq!(cfg.service.name, "webex-bridge");
        assert_eq!(cfg.service.http.port, 8087);
        assert_eq!(cfg.mattermost.token, "secret");
        assert!(cfg.webex.is_valid());
    }
}
