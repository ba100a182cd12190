//! Host configuration
//!
//! A single TOML file declares which remote hosts images may be loaded
//! from and overrides the card options. Every key is optional; an empty
//! file reproduces the stock card.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{BiolinkError, BiolinkResult};
use crate::presence::MAX_PERIOD;
use crate::profile::{
    CardOptions, SecondaryPanel, SimulatedPanelConfig, StaticPanelConfig, DEFAULT_PROFILE_IMAGE,
};
use crate::tilt::TiltOrigin;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "biolink.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Mirrors the host framework's strict mode switch; surfaced in logs only
    pub strict_mode: bool,
    pub images: ImageConfig,
    pub card: CardSection,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            strict_mode: true,
            images: ImageConfig::default(),
            card: CardSection::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Allowed remote image hosts. Full URLs are accepted and reduced to
    /// their host.
    pub domains: Vec<String>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            domains: vec!["cdn4.vectorstock.com".to_string()],
        }
    }
}

/// Where an image URL points, as far as the allow-list is concerned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Relative or data URL served with the app
    Local,
    Allowed(String),
    Disallowed(String),
}

impl ImageConfig {
    pub fn classify(&self, url: &str) -> ImageSource {
        let Some(host) = remote_host(url) else {
            return ImageSource::Local;
        };
        let allowed = self
            .domains
            .iter()
            .any(|d| normalize_host(d).eq_ignore_ascii_case(host));
        if allowed {
            ImageSource::Allowed(host.to_string())
        } else {
            ImageSource::Disallowed(host.to_string())
        }
    }

    /// Log a warning for hosts outside the allow-list. The image still
    /// renders; a bad source only degrades visually.
    pub fn check(&self, url: &str) -> ImageSource {
        let source = self.classify(url);
        if let ImageSource::Disallowed(ref host) = source {
            warn!(%host, %url, "image host is not in images.domains");
        }
        source
    }
}

/// Host part of an absolute http(s) URL, `None` for anything local
fn remote_host(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .or_else(|| url.strip_prefix("//"))?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host);
    (!host.is_empty()).then_some(host)
}

/// Reduce a domains entry to a bare host
pub fn normalize_host(entry: &str) -> &str {
    remote_host(entry).unwrap_or(entry.trim_end_matches('/'))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardSection {
    pub profile_image_url: String,
    pub tilt_origin: TiltOrigin,
    pub secondary: SecondarySection,
}

impl Default for CardSection {
    fn default() -> Self {
        Self {
            profile_image_url: DEFAULT_PROFILE_IMAGE.to_string(),
            tilt_origin: TiltOrigin::default(),
            secondary: SecondarySection::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SecondarySection {
    Static {
        label: Option<String>,
        image_url: Option<String>,
    },
    Simulated {
        period_secs: Option<u64>,
    },
}

impl Default for SecondarySection {
    fn default() -> Self {
        SecondarySection::Simulated { period_secs: None }
    }
}

impl HostConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> BiolinkResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            strict_mode = config.strict_mode,
            domains = config.images.domains.len(),
            "loaded host config"
        );
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> BiolinkResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "no host config found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(text: &str) -> BiolinkResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> BiolinkResult<()> {
        if let SecondarySection::Simulated {
            period_secs: Some(secs),
        } = self.card.secondary
        {
            if secs == 0 {
                return Err(BiolinkError::InvalidConfig(
                    "card.secondary.period_secs must be positive".to_string(),
                ));
            }
            if secs > MAX_PERIOD.as_secs() {
                return Err(BiolinkError::InvalidConfig(format!(
                    "card.secondary.period_secs must be at most {}",
                    MAX_PERIOD.as_secs()
                )));
            }
        }
        if let Some(empty) = self.images.domains.iter().find(|d| normalize_host(d).is_empty()) {
            return Err(BiolinkError::InvalidConfig(format!(
                "images.domains entry {:?} has no host",
                empty
            )));
        }
        Ok(())
    }

    /// Card options described by this config
    pub fn card_options(&self) -> CardOptions {
        let secondary_panel = match &self.card.secondary {
            SecondarySection::Static { label, image_url } => {
                let defaults = StaticPanelConfig::default();
                SecondaryPanel::Static(StaticPanelConfig {
                    image_url: image_url.clone().unwrap_or(defaults.image_url),
                    label: label.clone().unwrap_or(defaults.label),
                })
            }
            SecondarySection::Simulated { period_secs } => {
                let mut cfg = SimulatedPanelConfig::default();
                if let Some(secs) = period_secs {
                    cfg.period = Duration::from_secs(*secs);
                }
                SecondaryPanel::Simulated(cfg)
            }
        };

        CardOptions {
            profile_image_url: self.card.profile_image_url.clone(),
            secondary_panel,
            tilt_origin: self.card.tilt_origin,
            ..CardOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = HostConfig::from_toml_str("").unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.card_options(), CardOptions::default());
    }

    #[test]
    fn full_url_domain_normalizes_to_host() {
        assert_eq!(
            normalize_host("https://cdn4.vectorstock.com/i/1000x1000/71/33/logo.jpg"),
            "cdn4.vectorstock.com"
        );
        assert_eq!(normalize_host("example.com"), "example.com");
    }

    #[test]
    fn classify_image_sources() {
        let images = ImageConfig {
            domains: vec!["https://cdn.example.com/some/path.png".to_string()],
        };
        assert_eq!(images.classify("/python-logo.png"), ImageSource::Local);
        assert_eq!(
            images.classify("https://CDN.example.com/a.png"),
            ImageSource::Allowed("CDN.example.com".to_string())
        );
        assert_eq!(
            images.classify("http://user@evil.test:8080/a.png?x=1"),
            ImageSource::Disallowed("evil.test".to_string())
        );
    }

    #[test]
    fn static_panel_section() {
        let config = HostConfig::from_toml_str(
            r#"
            [card]
            profile_image_url = "https://example.com/a.png"

            [card.secondary]
            kind = "static"
            label = "Rust"
            "#,
        )
        .unwrap();
        let options = config.card_options();
        assert_eq!(options.profile_image_url, "https://example.com/a.png");
        assert_eq!(
            options.secondary_panel,
            SecondaryPanel::Static(StaticPanelConfig {
                image_url: "/python-logo.png".to_string(),
                label: "Rust".to_string(),
            })
        );
    }

    #[test]
    fn measured_tilt_and_custom_period() {
        let config = HostConfig::from_toml_str(
            r#"
            [card]
            tilt_origin = "measured"
            [card.secondary]
            kind = "simulated"
            period_secs = 5
            "#,
        )
        .unwrap();
        let options = config.card_options();
        assert_eq!(options.tilt_origin, TiltOrigin::Measured);
        match options.secondary_panel {
            SecondaryPanel::Simulated(cfg) => assert_eq!(cfg.period, Duration::from_secs(5)),
            other => panic!("unexpected panel: {:?}", other),
        }
    }

    #[test]
    fn unknown_panel_kind_is_parse_error() {
        let err = HostConfig::from_toml_str("[card.secondary]\nkind = \"live\"\n").unwrap_err();
        assert!(matches!(err, BiolinkError::ConfigParse(_)));
    }

    #[test]
    fn zero_period_is_rejected() {
        let err = HostConfig::from_toml_str(
            "[card.secondary]\nkind = \"simulated\"\nperiod_secs = 0\n",
        )
        .unwrap_err();
        assert!(matches!(err, BiolinkError::InvalidConfig(_)));
    }

    #[test]
    fn oversized_period_is_rejected() {
        let err = HostConfig::from_toml_str(
            "[card.secondary]\nkind = \"simulated\"\nperiod_secs = 9223372036854775807\n",
        )
        .unwrap_err();
        assert!(matches!(err, BiolinkError::InvalidConfig(_)));

        let config = HostConfig::from_toml_str(
            "[card.secondary]\nkind = \"simulated\"\nperiod_secs = 86400\n",
        )
        .unwrap();
        assert!(matches!(
            config.card.secondary,
            SecondarySection::Simulated { period_secs: Some(86_400) }
        ));
    }
}
