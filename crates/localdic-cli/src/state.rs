//! Application state wiring the dictionary service together.
//!
//! The service is generic over store and restarter traits; AppState pins it
//! to the concrete infra implementations.

use localdic_core::service::dictionary::DictionaryService;
use localdic_infra::filesystem::{resolve_config, FileWordStore};
use localdic_infra::process::KillallRestarter;
use localdic_types::config::DictionaryConfig;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteDictionaryService = DictionaryService<FileWordStore, KillallRestarter>;

pub struct AppState {
    pub dictionary: ConcreteDictionaryService,
    pub config: DictionaryConfig,
}

impl AppState {
    /// Resolve the dictionary location from the home directory and wire the service.
    pub fn init() -> anyhow::Result<Self> {
        let config = resolve_config()?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: DictionaryConfig) -> Self {
        let dictionary = DictionaryService::new(
            FileWordStore::from_config(&config),
            KillallRestarter::from_config(&config),
        );
        Self { dictionary, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_from_config_wires_path_and_service() {
        let config = DictionaryConfig::for_home(Path::new("/Users/luna"));
        let state = AppState::from_config(config.clone());

        assert_eq!(state.dictionary.store().path(), config.dictionary_path);
        assert_eq!(state.config.spell_service, "AppleSpell");
    }
}
