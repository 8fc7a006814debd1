//! Runtime configuration and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for pacing and persistence.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Pause between the player's action and the boss's reply.
    pub boss_turn_delay: Duration,
    /// Save progression to disk instead of keeping it in memory.
    pub enable_persistence: bool,
    /// Directory for `progression.json`. Platform data dir when unset.
    pub save_dir: Option<PathBuf>,
    /// Directory with RON/TOML content overriding the built-in catalog.
    pub content_dir: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            boss_turn_delay: Duration::from_millis(Self::DEFAULT_BOSS_TURN_DELAY_MS),
            enable_persistence: true,
            save_dir: None,
            content_dir: None,
        }
    }
}

impl RuntimeConfig {
    pub const DEFAULT_BOSS_TURN_DELAY_MS: u64 = 1000;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BOSS_TURN_DELAY_MS` - Delay before the boss acts (default: 1000)
    /// - `BATTLE_PERSISTENCE` - Save progression to disk (default: true)
    /// - `BATTLE_SAVE_DIR` - Directory for save data (default: platform-specific)
    /// - `BATTLE_CONTENT_DIR` - Content data directory (default: built-in catalog)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(delay) = read_env::<u64>("BOSS_TURN_DELAY_MS") {
            config.boss_turn_delay = Duration::from_millis(delay);
        }

        if let Some(enable) = read_env::<bool>("BATTLE_PERSISTENCE") {
            config.enable_persistence = enable;
        }

        config.save_dir = env::var("BATTLE_SAVE_DIR").ok().map(PathBuf::from);
        config.content_dir = env::var("BATTLE_CONTENT_DIR").ok().map(PathBuf::from);

        config
    }

    /// Where progression is saved: the configured directory, else the
    /// platform data directory.
    pub fn resolve_save_dir(&self) -> Option<PathBuf> {
        self.save_dir.clone().or_else(|| {
            directories::ProjectDirs::from("", "", "boss-battle")
                .map(|dirs| dirs.data_dir().to_path_buf())
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.boss_turn_delay, Duration::from_secs(1));
        assert!(config.enable_persistence);
        assert!(config.content_dir.is_none());
    }

    #[test]
    fn explicit_save_dir_wins() {
        let config = RuntimeConfig {
            save_dir: Some(PathBuf::from("/tmp/saves")),
            ..RuntimeConfig::default()
        };
        assert_eq!(config.resolve_save_dir(), Some(PathBuf::from("/tmp/saves")));
    }
}
