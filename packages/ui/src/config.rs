use dioxus::prelude::*;
use store::SiteConfig;

fn parse(source: &str) -> SiteConfig {
    SiteConfig::from_toml(source).unwrap_or_else(|e| {
        tracing::warn!("invalid {}, using defaults: {e}", SiteConfig::filename());
        SiteConfig::default()
    })
}

/// Provide the site configuration parsed from `source` (the text of `site.toml`).
#[component]
pub fn SiteConfigProvider(source: String, children: Element) -> Element {
    use_context_provider(|| parse(&source));
    rsx! {
        {children}
    }
}

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
