//! Theme management module for the application.
//!
//! Light and dark themes. The choice is persisted in `localStorage["theme"]`
//! and applied as `data-theme` on the `<html>` element so the stylesheet can
//! switch its CSS variables.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::icons::icon;
use crate::shared::storage;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for `data-theme` and storage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Anything other than `"dark"` is the light theme.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }
}

const THEME_STORAGE_KEY: &str = "theme";

fn load_theme_from_storage() -> Theme {
    storage::get(THEME_STORAGE_KEY)
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

fn apply_theme(theme: Theme) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        storage::set(THEME_STORAGE_KEY, theme.as_str());
        apply_theme(theme);
        log::debug!("theme -> {}", theme.as_str());
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Header button flipping between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| ctx.toggle()
            title=move || match ctx.theme.get() {
                Theme::Light => "Switch to dark theme",
                Theme::Dark => "Switch to light theme",
            }
        >
            {move || match ctx.theme.get() {
                Theme::Light => icon("moon"),
                Theme::Dark => icon("sun"),
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_light() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("forest"), Theme::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        for theme in Theme::all() {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }
}
