use dioxus::prelude::*;

use crate::pages::AccessScreen;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The access screen
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    AccessScreen {},
}

/// Root application component.
///
/// Provides global styles and routing. The access configuration is already
/// in context, supplied by the launcher.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
