//! Transient notifications stacked in the top-right corner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::shared::config::{config, ToastConfig};
use crate::shared::icons::icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn duration_ms(&self, cfg: &ToastConfig) -> u32 {
        match self {
            ToastKind::Success => cfg.success_ms,
            ToastKind::Error => cfg.error_ms,
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            ToastKind::Success => "check-circle",
            ToastKind::Error => "alert-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    pub toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = Uuid::new_v4();
        self.toasts.update(|list| list.push(Toast { id, kind, message }));

        let this = *self;
        let delay = kind.duration_ms(&config().toasts);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        // the host may already be gone when a timer fires after unmount
        let _ = self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found. Provide it in App.")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.css_class()
                            role="status"
                            title="Click to dismiss"
                            on:click=move |_| service.dismiss(id)
                        >
                            {icon(toast.kind.icon_name())}
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations_follow_kind() {
        let cfg = ToastConfig::default();
        assert_eq!(ToastKind::Success.duration_ms(&cfg), 3000);
        assert_eq!(ToastKind::Error.duration_ms(&cfg), 5000);
    }
}
