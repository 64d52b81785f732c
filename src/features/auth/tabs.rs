//! Tab selection for the auth page. Exactly one tab and its panel are active;
//! switching tabs hides every status message so stale feedback never shows on
//! the other form.

use crate::features::auth::status::FormView;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    pub const ALL: [AuthTab; 2] = [AuthTab::Login, AuthTab::Register];

    pub fn id(self) -> &'static str {
        match self {
            AuthTab::Login => "login",
            AuthTab::Register => "register",
        }
    }

    /// Element id of the panel the tab controls, `{id}-panel`.
    pub fn panel_id(self) -> String {
        format!("{}-panel", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            AuthTab::Login => "Iniciar sesión",
            AuthTab::Register => "Crear cuenta",
        }
    }

    /// Resolves a tab from its id or its panel id.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.strip_suffix("-panel").unwrap_or(id);
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    /// Tab opened by a route: `/register` selects registration, any other path login.
    pub fn for_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path.strip_prefix('/') {
            Some("register") => AuthTab::Register,
            _ => AuthTab::Login,
        }
    }
}

/// Active-tab state plus the status views it clears on every switch.
pub struct TabController<V> {
    active: AuthTab,
    views: Vec<V>,
}

impl<V: FormView> TabController<V> {
    pub fn new(initial: AuthTab, views: Vec<V>) -> Self {
        Self {
            active: initial,
            views,
        }
    }

    pub fn active(&self) -> AuthTab {
        self.active
    }

    pub fn is_active(&self, tab: AuthTab) -> bool {
        self.active == tab
    }

    pub fn is_panel_active(&self, panel_id: &str) -> bool {
        AuthTab::from_id(panel_id).is_some_and(|tab| self.is_active(tab))
    }

    /// Activates `tab` and hides every registered status message.
    pub fn select(&mut self, tab: AuthTab) {
        debug!(from = self.active.id(), to = tab.id(), "auth tab selected");
        self.active = tab;
        for view in &self.views {
            view.hide_status();
        }
    }
}
