use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::theme::ThemeProvider;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::status::ConnectionStatus;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    let connection = ConnectionStatus::new();
    connection.start_monitor();
    provide_context(connection);

    view! {
        <ThemeProvider>
            <AppShell />
            <ToastHost />
        </ThemeProvider>
    }
}
