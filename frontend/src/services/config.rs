use super::logging::Logger;
use loklok_shared::SiteConfig;

const SITE_CONFIG: &str = include_str!("../../config/site.json");

/// Settings bundled with the build. A bad file falls back to defaults.
pub fn load_site_config() -> SiteConfig {
    match SiteConfig::from_json(SITE_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            Logger::warn_with_component("config", &format!("site.json rejected, using defaults: {}", e));
            SiteConfig::default()
        }
    }
}
