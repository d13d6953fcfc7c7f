use std::path::PathBuf;

const DB_PATH_VAR: &str = "HARDINESS_DB_PATH";
const MAPS_DIR_VAR: &str = "HARDINESS_MAPS_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Sqlite file holding the dialogue states.
    pub db_path: String,
    /// Zone map paths are resolved against this directory.
    pub maps_dir: PathBuf,
}

impl Config {
    /// Reads the settings from the environment. Call after `dotenv()` so values
    /// from `.env` are picked up too.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());
        Self {
            db_path: non_empty(DB_PATH_VAR).unwrap_or_else(|| "db.sqlite".to_string()),
            maps_dir: non_empty(MAPS_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    pub fn map_path(&self, map: &str) -> PathBuf {
        self.maps_dir.join(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.db_path, "db.sqlite");
        assert_eq!(config.map_path("maps/zone_hot.png"), PathBuf::from("./maps/zone_hot.png"));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(|key| match key {
            DB_PATH_VAR => Some("/var/lib/hardiness/state.sqlite".to_string()),
            MAPS_DIR_VAR => Some("/srv/hardiness".to_string()),
            _ => None,
        });
        assert_eq!(config.db_path, "/var/lib/hardiness/state.sqlite");
        assert_eq!(
            config.map_path("maps/zone_cold.png"),
            PathBuf::from("/srv/hardiness/maps/zone_cold.png")
        );
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, Config::from_lookup(|_| None));
    }
}
