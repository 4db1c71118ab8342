/// Where form submissions are sent. Resolved once in `main` and handed to the
/// app as a prop; an absent endpoint means the site runs in demo mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub submit_endpoint: Option<String>,
}

impl SiteConfig {
    /// Reads `VLV_SUBMIT_ENDPOINT` from the build environment. Setting it to an
    /// empty string forces demo mode even in debug builds.
    pub fn from_build_env() -> Self {
        Self::with_endpoint(option_env!("VLV_SUBMIT_ENDPOINT").or(default_endpoint()))
    }

    pub fn with_endpoint(endpoint: Option<&str>) -> Self {
        let submit_endpoint = endpoint
            .map(|e| e.trim().trim_end_matches('/'))
            .filter(|e| !e.is_empty())
            .map(str::to_string);
        Self { submit_endpoint }
    }

    pub fn is_demo(&self) -> bool {
        self.submit_endpoint.is_none()
    }
}

#[cfg(debug_assertions)]
fn default_endpoint() -> Option<&'static str> {
    Some("http://localhost:3001") // backend crate when running locally
}

#[cfg(not(debug_assertions))]
fn default_endpoint() -> Option<&'static str> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let config = SiteConfig::with_endpoint(Some("https://forms.example.com/ "));
        assert_eq!(config.submit_endpoint.as_deref(), Some("https://forms.example.com"));
        assert!(!config.is_demo());
    }

    #[test]
    fn blank_endpoint_means_demo_mode() {
        assert!(SiteConfig::with_endpoint(Some("   ")).is_demo());
        assert!(SiteConfig::with_endpoint(None).is_demo());
    }
}
