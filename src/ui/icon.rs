use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const BUILDING: &str = "building";
    pub const USER: &str = "user";
    pub const PALETTE: &str = "palette";
    pub const CREDIT_CARD: &str = "credit-card";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const X: &str = "x";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const LOADER: &str = "loader";
    pub const PRINTER: &str = "printer";
    pub const DOWNLOAD: &str = "download";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const REFRESH: &str = "refresh";
    pub const DOCUMENT_TEXT: &str = "document-text";
    pub const DASHBOARD: &str = "dashboard";
    pub const USERS: &str = "users";
    pub const SHIELD: &str = "shield";
    pub const MESSAGE: &str = "message";
    pub const TRENDING_UP: &str = "trending-up";
}
