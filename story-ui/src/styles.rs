//! Presentation rules for the loading view.
//!
//! The spinner's rotation is defined here as a CSS animation. Components only
//! emit the class names these rules target.

/// Stylesheet for `loading-container`, `loading-animation` and `spinner`.
pub static LOADING_CSS: &str = include_str!("../assets/css/loading.css");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ANIMATION_CLASS, CONTAINER_CLASS, INFO_CLASS, SPINNER_CLASS};

    #[test]
    fn test_stylesheet_targets_every_region() {
        for class in [CONTAINER_CLASS, ANIMATION_CLASS, SPINNER_CLASS, INFO_CLASS] {
            assert!(
                LOADING_CSS.contains(&format!(".{class}")),
                "missing rule for .{class}"
            );
        }
    }

    #[test]
    fn test_spinner_rotation_is_a_css_animation() {
        assert!(LOADING_CSS.contains("@keyframes"));
        assert!(LOADING_CSS.contains("rotate(360deg)"));
    }
}
