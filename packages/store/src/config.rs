//! # Site configuration: `site.toml`
//!
//! Front-end behaviour that is tuned per deployment rather than hard-coded.
//!
//! ```toml
//! [auth]
//! login_path = "/admin/login"    # where unauthenticated visitors are sent
//! landing_path = "/admin"        # where a signed-in admin lands after login
//!
//! [gallery]
//! preload_count = 3              # images fetched ahead of display on activation
//! preload_stagger_ms = 100       # delay added per preloaded image
//!
//! [slideshow]
//! interval_secs = 5              # 0 disables autoplay
//! ```
//!
//! All structs derive `Default` so a missing or partial file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub slideshow: SlideshowConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_landing_path")]
    pub landing_path: String,
}

fn default_login_path() -> String {
    "/admin/login".to_string()
}

fn default_landing_path() -> String {
    "/admin".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            landing_path: default_landing_path(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_preload_count")]
    pub preload_count: usize,
    #[serde(default = "default_preload_stagger_ms")]
    pub preload_stagger_ms: u64,
}

fn default_preload_count() -> usize {
    3
}

fn default_preload_stagger_ms() -> u64 {
    100
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            preload_count: default_preload_count(),
            preload_stagger_ms: default_preload_stagger_ms(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlideshowConfig {
    /// Autoplay interval in seconds. 0 disables autoplay.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u32,
}

fn default_interval_secs() -> u32 {
    5
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl SiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.gallery.preload_count, 3);
        assert_eq!(config.gallery.preload_stagger_ms, 100);
        assert_eq!(config.auth.login_path, "/admin/login");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = SiteConfig::from_toml("[gallery]\npreload_count = 6\n").unwrap();
        assert_eq!(config.gallery.preload_count, 6);
        assert_eq!(config.gallery.preload_stagger_ms, 100);
        assert_eq!(config.slideshow.interval_secs, 5);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = SiteConfig::default();
        config.auth.landing_path = "/admin/blogs".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml(&text).unwrap(), config);
    }
}
