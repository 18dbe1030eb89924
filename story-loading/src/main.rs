//! Story generation loading screen.
//!
//! Mounts `LoadingStatus` into the host page. The host names the theme being
//! generated with a `data-theme` attribute on the root element:
//!
//! ```html
//! <div id="story-loading-root" data-theme="ocean"></div>
//! ```

use dioxus::prelude::*;
use story_ui::components::LoadingStatus;
use story_ui::styles::LOADING_CSS;
use story_ui::DisplayConfiguration;

/// DOM id of the element the app is mounted into.
const ROOT_ID: &str = "story-loading-root";

/// Attribute on the root element carrying the theme label.
const THEME_ATTRIBUTE: &str = "data-theme";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

/// Read the host-supplied theme. Anything missing means "no theme".
fn host_theme() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(ROOT_ID)?
        .get_attribute(THEME_ATTRIBUTE)
}

#[component]
fn App() -> Element {
    // Read once on mount; the view itself is stateless.
    let config = use_hook(|| {
        let config = DisplayConfiguration {
            theme: host_theme(),
        };
        log::info!("Showing loading status (theme: {:?})", config.theme());
        config
    });

    rsx! {
        style { {LOADING_CSS} }
        LoadingStatus { config }
    }
}
