use leptos::prelude::*;

/// Stroke icon drawn from one or more SVG path strings (24x24 grid).
fn stroke_icon(size: u32, paths: &'static [&'static str]) -> AnyView {
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}

pub fn icon(name: &str) -> AnyView {
    match name {
        "dashboard" => stroke_icon(20, &[
            "M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z",
        ]),
        "billing" | "file-text" => stroke_icon(20, &[
            "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
            "M14 2v6h6", "M16 13H8", "M16 17H8", "M10 9H8",
        ]),
        "inventory" | "package" => stroke_icon(20, &[
            "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            "M3.27 6.96 12 12l8.73-5.04", "M12 22V12",
        ]),
        "customers" => stroke_icon(20, &[
            "M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            "M23 21v-2a4 4 0 0 0-3-3.87", "M16 3.13a4 4 0 0 1 0 7.75",
        ]),
        "settings" => stroke_icon(20, &[
            "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
            "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.68 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.68a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
        ]),
        "panel-left-close" => stroke_icon(18, &[
            "M3 3h18v18H3z", "M9 3v18", "M16 15l-3-3 3-3",
        ]),
        "panel-left-open" => stroke_icon(18, &[
            "M3 3h18v18H3z", "M9 3v18", "M14 9l3 3-3 3",
        ]),
        "sun" => stroke_icon(18, &[
            "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            "M12 2v2", "M12 20v2", "M4.93 4.93l1.41 1.41", "M17.66 17.66l1.41 1.41",
            "M2 12h2", "M20 12h2", "M6.34 17.66l-1.41 1.41", "M19.07 4.93l-1.41 1.41",
        ]),
        "moon" => stroke_icon(18, &["M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"]),
        "search" => stroke_icon(16, &["M11 3a8 8 0 1 0 0 16a8 8 0 1 0 0-16z", "M21 21l-4.35-4.35"]),
        "x" => stroke_icon(16, &["M18 6 6 18", "M6 6l12 12"]),
        "check-circle" => stroke_icon(18, &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4 12 14.01l-3-3"]),
        "alert-circle" => stroke_icon(18, &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M12 8v4", "M12 16h.01",
        ]),
        "user" => stroke_icon(18, &[
            "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2", "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
        ]),
        "edit" => stroke_icon(16, &[
            "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7",
            "M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4z",
        ]),
        "save" => stroke_icon(16, &[
            "M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z",
            "M17 21v-8H7v8", "M7 3v5h8",
        ]),
        "download" => stroke_icon(16, &[
            "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "M7 10l5 5 5-5", "M12 15V3",
        ]),
        "refresh" => stroke_icon(16, &[
            "M23 4v6h-6", "M1 20v-6h6",
            "M3.51 9a9 9 0 0 1 14.85-3.36L23 10", "M1 14l4.64 4.36A9 9 0 0 0 20.49 15",
        ]),
        "trash" => stroke_icon(16, &[
            "M3 6h18", "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6", "M10 11v6", "M14 11v6",
            "M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2",
        ]),
        "battery" => stroke_icon(18, &["M3 7h15a1 1 0 0 1 1 1v8a1 1 0 0 1-1 1H3z", "M22 11v2", "M6 10v4", "M10 10v4"]),
        "chassis" => stroke_icon(18, &[
            "M1 3h15v13H1z", "M16 8h4l3 3v5h-7z",
            "M5.5 16a2.5 2.5 0 1 0 0 5a2.5 2.5 0 1 0 0-5z",
            "M18.5 16a2.5 2.5 0 1 0 0 5a2.5 2.5 0 1 0 0-5z",
        ]),
        "arrow-up" => stroke_icon(14, &["M12 19V5", "M5 12l7-7 7 7"]),
        "arrow-down" => stroke_icon(14, &["M12 5v14", "M19 12l-7 7-7-7"]),
        "wifi" => stroke_icon(16, &["M5 12.55a11 11 0 0 1 14.08 0", "M1.42 9a16 16 0 0 1 21.16 0", "M8.53 16.11a6 6 0 0 1 6.95 0", "M12 20h.01"]),
        "wifi-off" => stroke_icon(16, &["M1 1l22 22", "M16.72 11.06A10.94 10.94 0 0 1 19 12.55", "M8.53 16.11a6 6 0 0 1 6.95 0", "M12 20h.01"]),
        "activity" => stroke_icon(18, &["M22 12h-4l-3 9L9 3l-3 9H2"]),
        "rupee" => stroke_icon(18, &["M6 3h12", "M6 8h12", "M6 13l8.5 8", "M6 13h3a5 5 0 0 0 0-10"]),
        "cart" => stroke_icon(18, &[
            "M9 20a1 1 0 1 0 0 2a1 1 0 1 0 0-2z", "M20 20a1 1 0 1 0 0 2a1 1 0 1 0 0-2z",
            "M1 1h4l2.68 12.39a2 2 0 0 0 2 1.61h7.72a2 2 0 0 0 2-1.61L23 6H6",
        ]),
        "chevron-right" => stroke_icon(16, &["M9 18l6-6-6-6"]),
        "arrow-left" => stroke_icon(16, &["M19 12H5", "M12 19l-7-7 7-7"]),
        _ => stroke_icon(20, &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M12 8v4l3 3"]),
    }
}

/// Map the backend's Font Awesome class names onto the local icon set.
pub fn icon_for_fa(class: &str) -> &'static str {
    if class.contains("battery") {
        "battery"
    } else if class.contains("shopping") || class.contains("cart") {
        "cart"
    } else if class.contains("car") || class.contains("cogs") || class.contains("truck") {
        "chassis"
    } else if class.contains("user") {
        "user"
    } else if class.contains("file") || class.contains("receipt") {
        "file-text"
    } else if class.contains("box") {
        "package"
    } else {
        "activity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_for_fa() {
        assert_eq!(icon_for_fa("fas fa-battery-half"), "battery");
        assert_eq!(icon_for_fa("fas fa-car"), "chassis");
        assert_eq!(icon_for_fa("fas fa-shopping-cart"), "cart");
        assert_eq!(icon_for_fa("fas fa-user-plus"), "user");
        assert_eq!(icon_for_fa("fas fa-box"), "package");
        assert_eq!(icon_for_fa("fas fa-lightbulb"), "activity");
    }
}
