//! Configuration module.

pub mod loader;

pub use loader::{
    apply_env_overrides, apply_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

use crate::model::ElementKind;
use std::collections::HashMap;

/// Window-level configuration.
///
/// Holds the settings a [`Window`](crate::window::Window) consults while
/// registering elements and probing the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Whether `add` makes new elements visible.
    ///
    /// When `true`, each added element is activated unless its kind's cap is
    /// already reached. When `false`, added elements stay hidden.
    pub auto_activate: bool,

    /// Console height used when the console reports zero rows or cannot be probed.
    pub fallback_console_height: u16,

    /// Console width used when the console reports zero columns or cannot be probed.
    pub fallback_console_width: u16,

    /// Per-kind instance caps keyed by short type name (e.g. `"Title"`).
    ///
    /// An entry here takes precedence over the element's own `max_instances()`.
    /// The key ignores the module path, so distinct types sharing a short name
    /// (an application's own `Text` and [`crate::widgets::Text`]) share one cap.
    pub limits: HashMap<String, usize>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            auto_activate: true,
            fallback_console_height: 0,
            fallback_console_width: 0,
            limits: HashMap::new(),
        }
    }
}

impl WindowConfig {
    /// Add or replace the cap for the kind named `kind`.
    pub fn with_limit(mut self, kind: impl Into<String>, max: usize) -> Self {
        self.limits.insert(kind.into(), max);
        self
    }

    /// Configured cap for `kind`, if any.
    pub fn limit_for(&self, kind: ElementKind) -> Option<usize> {
        self.limits.get(kind.name()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Text, Title};

    #[test]
    fn default_config_auto_activates_without_fallback() {
        let config = WindowConfig::default();
        assert!(config.auto_activate, "Default config should auto-activate");
        assert_eq!(config.fallback_console_height, 0);
        assert_eq!(config.fallback_console_width, 0);
        assert!(config.limits.is_empty());
    }

    #[test]
    fn limit_for_matches_short_kind_name() {
        let config = WindowConfig::default().with_limit("Title", 2);
        assert_eq!(config.limit_for(ElementKind::of::<Title>()), Some(2));
        assert_eq!(config.limit_for(ElementKind::of::<Text>()), None);
    }

    #[test]
    fn with_limit_replaces_existing_entry() {
        let config = WindowConfig::default()
            .with_limit("Text", 1)
            .with_limit("Text", 4);
        assert_eq!(config.limits.len(), 1);
        assert_eq!(config.limit_for(ElementKind::of::<Text>()), Some(4));
    }

    #[test]
    fn limit_is_shared_by_types_with_the_same_short_name() {
        mod app {
            pub struct Text;

            impl crate::model::Element for Text {
                fn height(&self) -> u16 {
                    1
                }

                fn width(&self) -> u16 {
                    1
                }
            }
        }

        let config = WindowConfig::default().with_limit("Text", 3);
        assert_ne!(ElementKind::of::<app::Text>(), ElementKind::of::<Text>());
        assert_eq!(config.limit_for(ElementKind::of::<app::Text>()), Some(3));
        assert_eq!(config.limit_for(ElementKind::of::<Text>()), Some(3));
    }
}
