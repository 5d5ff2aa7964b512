use std::path::PathBuf;

/// Environment variable naming a JSON seed file
pub const SEED_FILE_ENV: &str = "LIBRANET_SEED_FILE";

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "libranet=info";

/// Runtime configuration, read once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed file to populate the catalog from; the built-in sample set when absent
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed_file = lookup(SEED_FILE_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self { seed_file }
    }
}
