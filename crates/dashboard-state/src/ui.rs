//! Navigation state.

use std::fmt;
use std::str::FromStr;

use crate::error::StateError;

/// Top-level dashboard section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Dashboard,
    Logs,
    Settings,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Logs => "logs",
            Tab::Settings => "settings",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Tab::Dashboard),
            "logs" => Ok(Tab::Logs),
            "settings" => Ok(Tab::Settings),
            other => Err(StateError::UnknownTab(other.to_string())),
        }
    }
}

/// Section inside the settings tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SettingsTab {
    #[default]
    Telegram,
    Members,
    Whitelist,
}

impl SettingsTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsTab::Telegram => "telegram",
            SettingsTab::Members => "members",
            SettingsTab::Whitelist => "whitelist",
        }
    }
}

impl fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingsTab {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "telegram" => Ok(SettingsTab::Telegram),
            "members" => Ok(SettingsTab::Members),
            "whitelist" => Ok(SettingsTab::Whitelist),
            other => Err(StateError::UnknownTab(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
    pub settings_tab: SettingsTab,
    pub show_onboarding: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ui_state() {
        let ui = UiState::default();
        assert_eq!(ui.active_tab, Tab::Dashboard);
        assert_eq!(ui.settings_tab, SettingsTab::Telegram);
        assert!(!ui.show_onboarding);
    }

    #[test]
    fn test_tab_names_parse_back() {
        for tab in [Tab::Dashboard, Tab::Logs, Tab::Settings] {
            assert_eq!(tab.to_string().parse::<Tab>().unwrap(), tab);
        }
        for tab in [SettingsTab::Telegram, SettingsTab::Members, SettingsTab::Whitelist] {
            assert_eq!(tab.as_str().parse::<SettingsTab>().unwrap(), tab);
        }
    }

    #[test]
    fn test_unknown_tab() {
        let err = "billing".parse::<Tab>().unwrap_err();
        assert!(matches!(err, StateError::UnknownTab(name) if name == "billing"));
    }
}
