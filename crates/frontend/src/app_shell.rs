//! Application shell: layout, page host and global keyboard shortcuts.

use crate::layout::global_context::{use_global_context, viewport_width, Page};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::pages::PageHost;
use crate::layout::Shell;
use leptos::ev;
use leptos::prelude::*;

/// What a key press means at application level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellShortcut {
    ToggleSidebar,
    Navigate(Page),
}

/// `Ctrl`/`Cmd` + `B` or a digit; everything else belongs to the pages.
pub fn shell_shortcut(key: &str, ctrl_or_meta: bool) -> Option<ShellShortcut> {
    if !ctrl_or_meta {
        return None;
    }
    match key {
        "b" | "B" => Some(ShellShortcut::ToggleSidebar),
        other => Page::from_shortcut(other).map(ShellShortcut::Navigate),
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_global_context();
    ctx.init_router_integration();

    let _ = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if let Some(shortcut) = shell_shortcut(&ev.key(), ev.ctrl_key() || ev.meta_key()) {
            ev.prevent_default();
            match shortcut {
                ShellShortcut::ToggleSidebar => ctx.toggle_left(),
                ShellShortcut::Navigate(page) => ctx.navigate(page),
            }
        }
    });

    let _ = window_event_listener(ev::resize, move |_| {
        ctx.apply_viewport(viewport_width());
    });

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <PageHost /> }.into_any()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_need_modifier() {
        assert_eq!(shell_shortcut("b", false), None);
        assert_eq!(shell_shortcut("1", false), None);
    }

    #[test]
    fn test_shortcut_mapping() {
        assert_eq!(shell_shortcut("b", true), Some(ShellShortcut::ToggleSidebar));
        assert_eq!(
            shell_shortcut("3", true),
            Some(ShellShortcut::Navigate(Page::Inventory))
        );
        assert_eq!(shell_shortcut("s", true), None);
    }
}
