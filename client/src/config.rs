//! Site-wide tunables.
//!
//! DESIGN
//! ======
//! Every constant a controller depends on (storage key, header offset, drawer
//! breakpoint, timings) lives here so `site.json` can override it without a
//! rebuild of the controller code. Missing keys fall back to the defaults
//! below via `#[serde(default)]`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME_STORAGE_KEY: &str = "folio-theme";
pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;
pub const DEFAULT_DRAWER_BREAKPOINT: f64 = 768.0;
pub const DEFAULT_SCROLL_THROTTLE_MS: u32 = 100;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
    pub effects: EffectsConfig,
}

impl SiteConfig {
    /// Clamp out-of-range values so controllers can trust them.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            log::warn!("reveal threshold {} out of range, clamping", self.reveal.threshold);
            self.reveal.threshold = self.reveal.threshold.clamp(0.0, 1.0);
        }
        if self.nav.header_offset < 0.0 {
            self.nav.header_offset = 0.0;
        }
        if self.nav.drawer_breakpoint <= 0.0 {
            self.nav.drawer_breakpoint = DEFAULT_DRAWER_BREAKPOINT;
        }
        if self.theme.storage_key.trim().is_empty() {
            self.theme.storage_key = DEFAULT_THEME_STORAGE_KEY.to_owned();
        }
        if self.contact.endpoint.as_deref().is_some_and(|e| e.trim().is_empty()) {
            self.contact.endpoint = None;
        }
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding `light`, `dark`, or `system`.
    pub storage_key: String,
    /// `<meta name="theme-color">` value for each scheme.
    pub light_color: String,
    pub dark_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            light_color: "#ffffff".to_owned(),
            dark_color: "#0f172a".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Fixed header height subtracted when locating sections.
    pub header_offset: f64,
    /// Viewport width at which the mobile drawer gives way to the inline menu.
    pub drawer_breakpoint: f64,
    pub scroll_throttle_ms: u32,
    /// Scroll offset past which the header renders its compact style.
    pub scrolled_threshold: f64,
    pub back_to_top_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            header_offset: DEFAULT_HEADER_OFFSET,
            drawer_breakpoint: DEFAULT_DRAWER_BREAKPOINT,
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            scrolled_threshold: 50.0,
            back_to_top_threshold: 400.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that counts as an intersection.
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            root_margin: "0px 0px -50px 0px".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// HTTP endpoint receiving contact messages; simulated when absent.
    pub endpoint: Option<String>,
    pub simulated_delay_ms: u32,
    pub banner_dismiss_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            simulated_delay_ms: 1500,
            banner_dismiss_ms: 5000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub ripple_duration_ms: u32,
    pub type_speed_ms: u32,
    pub delete_speed_ms: u32,
    pub hold_ms: u32,
    pub pause_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            ripple_duration_ms: 600,
            type_speed_ms: 100,
            delete_speed_ms: 50,
            hold_ms: 2000,
            pause_ms: 500,
        }
    }
}
