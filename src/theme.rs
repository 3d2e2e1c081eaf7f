use serde::{Deserialize, Serialize};

/// Local storage key for the selected theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Runs in `<head>` before first paint and applies a stored choice to
/// `<html>`, so a saved light theme doesn't flash dark until hydration.
/// Reads the same JSON encoding the storage hook writes.
pub const THEME_INIT_SCRIPT: &str = "try{var t=JSON.parse(localStorage.getItem('theme'));\
if(t==='light'||t==='dark'){var c=document.documentElement.classList;\
c.remove('light','dark');c.add(t);}}catch(e){}";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class applied to `<html>`; tailwind's `dark:` variants key off it.
    pub fn class(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}
