//! Loading status component shown while a story is generated.

use crate::config::DisplayConfiguration;
use dioxus::prelude::*;

/// Class of the outer container.
pub const CONTAINER_CLASS: &str = "loading-container";
/// Class of the region wrapping the spinner.
pub const ANIMATION_CLASS: &str = "loading-animation";
/// Class of the decorative spinner. Its motion comes from `styles::LOADING_CSS`.
pub const SPINNER_CLASS: &str = "spinner";
/// Class of the informational paragraph.
pub const INFO_CLASS: &str = "loading-info";

pub const HEADING_TEXT: &str = "Generating Your theme";
pub const INFO_TEXT: &str = "Please wait while generate your story";

#[derive(Props, Clone, PartialEq)]
pub struct LoadingStatusProps {
    /// Configuration for this render pass
    #[props(default)]
    pub config: DisplayConfiguration,
}

/// Static placeholder: heading, spinner and an informational paragraph.
///
/// The theme is accepted but not interpolated into the heading.
#[component]
pub fn LoadingStatus(props: LoadingStatusProps) -> Element {
    let _theme = props.config.theme();

    rsx! {
        div {
            class: CONTAINER_CLASS,
            h2 { {HEADING_TEXT} }
            div {
                class: ANIMATION_CLASS,
                div { class: SPINNER_CLASS }
            }
            p {
                class: INFO_CLASS,
                {INFO_TEXT}
            }
        }
    }
}
