//! Server-side rendering of the loading view.

use crate::components::{LoadingStatus, LoadingStatusProps};
use crate::config::DisplayConfiguration;
use dioxus::prelude::*;

/// Render `LoadingStatus` for `config` into an HTML fragment.
///
/// Each call builds a fresh `VirtualDom`, so the output only depends on `config`.
pub fn render_loading_status(config: &DisplayConfiguration) -> String {
    let mut dom = VirtualDom::new_with_props(
        LoadingStatus,
        LoadingStatusProps {
            config: config.clone(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
