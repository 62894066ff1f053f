//! CLI-specific configuration for the terminal client.
use std::env;
use std::path::PathBuf;

/// Terminal client configuration.
///
/// Battle rules live in the content data directory; this only covers what
/// the terminal session needs to find that content and lay out the screen.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub hero_name: String,
    pub hero_class: String,
    /// Overrides the seed from `config.toml` when set.
    pub seed: Option<u64>,
    pub session_id: Option<String>,
    pub ui: UiConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            hero_name: "Hero".to_string(),
            hero_class: "Knight".to_string(),
            seed: None,
            session_id: None,
            ui: UiConfig::default(),
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DATA_DIR` - Content directory (default: `data`)
    /// - `HERO_NAME` - Hero display name (default: `Hero`)
    /// - `HERO_CLASS` - Hero class from `heroes.ron` (default: `Knight`)
    /// - `BATTLE_SEED` - Seed override for every roll
    /// - `BATTLE_SESSION_ID` - Log subdirectory name (default: timestamp)
    /// - `CLI_LOG_PANEL_HEIGHT` - Battle log panel height in lines (default: 10)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("BATTLE_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(name) = read_env::<String>("HERO_NAME").filter(|name| !name.trim().is_empty()) {
            config.hero_name = name;
        }
        if let Some(class) = read_env::<String>("HERO_CLASS") {
            config.hero_class = class;
        }
        config.seed = read_env::<u64>("BATTLE_SEED");
        config.session_id = read_env::<String>("BATTLE_SESSION_ID");

        if let Some(height) = read_env::<u16>("CLI_LOG_PANEL_HEIGHT") {
            config.ui.log_panel_height = height.max(3);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of the battle log panel in lines (including borders).
    pub log_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_panel_height: 10,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
