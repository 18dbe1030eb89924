//! Reusable Dioxus RSX components.

mod loading_status;

pub use loading_status::{
    LoadingStatus, LoadingStatusProps, ANIMATION_CLASS, CONTAINER_CLASS, HEADING_TEXT,
    INFO_CLASS, INFO_TEXT, SPINNER_CLASS,
};
