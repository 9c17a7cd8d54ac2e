use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Remote movie API settings (TMDB-compatible)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// API key, sent as the `api_key` query parameter
    #[serde(default)]
    pub api_key: Option<String>,
    /// Response language (e.g., "en-US")
    #[serde(default)]
    pub language: Option<String>,
    /// Prefix joined with `poster_path`
    #[serde(default = "default_poster_base_url")]
    pub poster_base_url: String,
    /// Prefix joined with `backdrop_path`
    #[serde(default = "default_backdrop_base_url")]
    pub backdrop_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// HTTP proxy URL (e.g., "http://127.0.0.1:7890" or "socks5://127.0.0.1:1080")
    #[serde(default)]
    pub proxy_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: None,
            language: None,
            poster_base_url: default_poster_base_url(),
            backdrop_base_url: default_backdrop_base_url(),
            request_timeout_secs: default_timeout(),
            proxy_url: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Share of the viewport width taken by one carousel item
    #[serde(default = "default_item_ratio")]
    pub item_ratio: f64,
    /// Share of the viewport height taken by the backdrop
    #[serde(default = "default_backdrop_ratio")]
    pub backdrop_ratio: f64,
    /// Rows a card rises when it reaches the center
    #[serde(default = "default_arc_rows")]
    pub arc_rows: u16,
    /// Download and draw poster/backdrop images
    #[serde(default = "default_true")]
    pub image_preview: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Carousel scroll animation
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            item_ratio: default_item_ratio(),
            backdrop_ratio: default_backdrop_ratio(),
            arc_rows: default_arc_rows(),
            image_preview: default_true(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve for scroll animations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the duration
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate snaps instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Snap animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Idle time after a free drag before snapping to the nearest item
    #[serde(default = "default_snap_delay")]
    pub snap_delay_ms: u64,
    /// Columns moved per mouse wheel notch
    #[serde(default = "default_wheel_columns")]
    pub wheel_columns: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
            snap_delay_ms: default_snap_delay(),
            wheel_columns: default_wheel_columns(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "paper", "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Screen background, also the color the backdrop fades into
    pub background: Option<String>,
    /// Card surface
    pub card: Option<String>,
    /// Primary text
    pub text: Option<String>,
    /// Secondary text (description, genres)
    pub muted: Option<String>,
    /// Accent color (rating stars, borders)
    pub accent: Option<String>,
    /// Status bar background
    pub status_bg: Option<String>,
    /// Error color
    pub error: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "l", "<C-d>" (Ctrl+d), "<S-Tab>" (Shift+Tab), "gg", "<CR>", "<Esc>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Snap to the next movie
    #[serde(default = "default_key_next_item")]
    pub next_item: String,
    /// Snap to the previous movie
    #[serde(default = "default_key_prev_item")]
    pub prev_item: String,
    /// Drag a fraction of an item to the right
    #[serde(default = "default_key_nudge_right")]
    pub nudge_right: String,
    /// Drag a fraction of an item to the left
    #[serde(default = "default_key_nudge_left")]
    pub nudge_left: String,
    /// Jump to the first movie
    #[serde(default = "default_key_jump_to_first")]
    pub jump_to_first: String,
    /// Jump to the last movie
    #[serde(default = "default_key_jump_to_last")]
    pub jump_to_last: String,
    /// Fetch the movie list again
    #[serde(default = "default_key_refresh")]
    pub refresh: String,
    /// Open the centered movie in a browser
    #[serde(default = "default_key_open_browser")]
    pub open_browser: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_item: default_key_next_item(),
            prev_item: default_key_prev_item(),
            nudge_right: default_key_nudge_right(),
            nudge_left: default_key_nudge_left(),
            jump_to_first: default_key_jump_to_first(),
            jump_to_last: default_key_jump_to_last(),
            refresh: default_key_refresh(),
            open_browser: default_key_open_browser(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_item() -> String { "l".to_string() }
fn default_key_prev_item() -> String { "h".to_string() }
fn default_key_nudge_right() -> String { "L".to_string() }
fn default_key_nudge_left() -> String { "H".to_string() }
fn default_key_jump_to_first() -> String { "gg".to_string() }
fn default_key_jump_to_last() -> String { "G".to_string() }
fn default_key_refresh() -> String { "r".to_string() }
fn default_key_open_browser() -> String { "o".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reelview")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_api_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_poster_base_url() -> String {
    "https://image.tmdb.org/t/p/w440_and_h660_face".to_string()
}

fn default_backdrop_base_url() -> String {
    "https://image.tmdb.org/t/p/w370_and_h556_multi_faces".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_tick_rate() -> u64 {
    100
}

/// Layout ratios must lie in (0, 1]
pub fn is_valid_ratio(ratio: f64) -> bool {
    ratio.is_finite() && ratio > 0.0 && ratio <= 1.0
}

impl UiConfig {
    /// Swap out-of-range layout ratios for their defaults, warning once each
    fn reset_bad_ratios(&mut self) {
        let fields = [
            ("item_ratio", &mut self.item_ratio, default_item_ratio()),
            ("backdrop_ratio", &mut self.backdrop_ratio, default_backdrop_ratio()),
        ];
        for (name, ratio, fallback) in fields {
            if !is_valid_ratio(*ratio) {
                tracing::warn!("ui.{} = {} is outside (0, 1], using {}", name, ratio, fallback);
                *ratio = fallback;
            }
        }
    }
}

fn default_item_ratio() -> f64 {
    0.72
}

fn default_backdrop_ratio() -> f64 {
    0.65
}

fn default_arc_rows() -> u16 {
    3
}

fn default_theme_name() -> String {
    "paper".to_string()
}

fn default_animation_duration() -> u64 {
    180
}

fn default_animation_fps() -> u32 {
    60
}

fn default_snap_delay() -> u64 {
    260
}

fn default_wheel_columns() -> u16 {
    4
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.ui.reset_bad_ratios();
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/reelview/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("reelview")
            .join("config.toml")
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("reelview.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
