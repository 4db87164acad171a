use crate::domain::ports::PreferenceStore;

pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    /// 只有 "dark" 代表深色，其他值一律視為淺色
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemeState::Dark,
            _ => ThemeState::Light,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeState::Light => "light",
            ThemeState::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeState::Dark)
    }

    /// 文件根節點上的 class
    pub fn document_class(&self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_CLASS)
    }
}

/// 頁面載入時讀一次偏好，每次切換都寫回
pub struct ThemeController<S: PreferenceStore> {
    state: ThemeState,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn mount(store: S) -> Self {
        let state = ThemeState::from_stored(store.load().as_deref());
        Self { state, store }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn toggle(&mut self) -> ThemeState {
        self.state = self.state.toggle();
        self.store.save(self.state.as_str());
        tracing::debug!("Theme switched to {}", self.state.as_str());
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
