pub mod io;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::cells::validator::DEFAULT_CURRENCY_PREFIX;
use crate::cells::CellRules;
use crate::projects::RootMarkers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Resource)]
#[serde(default)]
pub struct AppSettings {
    pub theme: ThemeMode,
    pub currency_prefix: String,
    pub root_markers: RootMarkers,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            currency_prefix: DEFAULT_CURRENCY_PREFIX.to_string(),
            root_markers: RootMarkers::default(),
        }
    }
}

impl AppSettings {
    pub fn cell_rules(&self) -> CellRules {
        CellRules::with_currency_prefix(self.currency_prefix.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"theme":"Dark"}"#).unwrap();
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.currency_prefix, "Lps");
        assert_eq!(settings.root_markers, RootMarkers::default());
    }

    #[test]
    fn root_markers_serialize_as_plain_list() {
        let settings = AppSettings {
            root_markers: RootMarkers::new([".git"]),
            ..Default::default()
        };
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["root_markers"], serde_json::json!([".git"]));
    }

    #[test]
    fn cell_rules_use_configured_prefix() {
        let settings = AppSettings {
            currency_prefix: " L ".into(),
            ..Default::default()
        };
        assert_eq!(settings.cell_rules().format_currency("5"), "L 5.00");
    }
}
