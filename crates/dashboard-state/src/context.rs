//! The dashboard's state containers, bundled.

use std::sync::Arc;

use crate::auth::AuthState;
use crate::chats::ChatsState;
use crate::container::{StateContainer, WatchContainer};
use crate::prompts::PromptsState;
use crate::ui::{SettingsTab, Tab, UiState};

/// One container of each kind, created by the caller and passed to whatever
/// needs it.
///
/// Cloning shares the containers.
#[derive(Clone)]
pub struct DashboardState {
    pub auth: Arc<dyn StateContainer<AuthState>>,
    pub chats: Arc<dyn StateContainer<ChatsState>>,
    pub prompts: Arc<dyn StateContainer<PromptsState>>,
    pub ui: Arc<dyn StateContainer<UiState>>,
}

impl DashboardState {
    /// Fresh watch-backed containers holding default values.
    pub fn new() -> Self {
        Self {
            auth: Arc::new(WatchContainer::<AuthState>::default()),
            chats: Arc::new(WatchContainer::<ChatsState>::default()),
            prompts: Arc::new(WatchContainer::<PromptsState>::default()),
            ui: Arc::new(WatchContainer::<UiState>::default()),
        }
    }

    /// Use caller-supplied containers, e.g. fakes in tests.
    pub fn with_containers(
        auth: Arc<dyn StateContainer<AuthState>>,
        chats: Arc<dyn StateContainer<ChatsState>>,
        prompts: Arc<dyn StateContainer<PromptsState>>,
        ui: Arc<dyn StateContainer<UiState>>,
    ) -> Self {
        Self {
            auth,
            chats,
            prompts,
            ui,
        }
    }

    /// Put every container back to its default value.
    pub fn reset(&self) {
        self.auth.set(AuthState::default());
        self.chats.set(ChatsState::default());
        self.prompts.set(PromptsState::default());
        self.ui.set(UiState::default());
    }

    pub fn show_tab(&self, tab: Tab) {
        self.ui.update(&mut |ui| ui.active_tab = tab);
    }

    /// Jump to a section of the settings tab.
    pub fn show_settings(&self, section: SettingsTab) {
        self.ui.update(&mut |ui| {
            ui.active_tab = Tab::Settings;
            ui.settings_tab = section;
        });
    }

    pub fn set_onboarding(&self, visible: bool) {
        self.ui.update(&mut |ui| ui.show_onboarding = visible);
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DashboardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardState")
            .field("auth", &self.auth.get())
            .field("chats", &self.chats.get().chats.len())
            .field("ui", &self.ui.get())
            .finish()
    }
}
