//! Overlay configuration and the layout plan rendered by the widget layer
//!
//! The plan is a plain description (class names, test ids, which wrapper to
//! use) so the composition rules can be checked without a renderer.

use super::{test_id, OverlayLifecycle, Visibility};

/// Default maximum width of the content container in pixels
pub const DEFAULT_MAX_WIDTH: u32 = 800;

/// Base class of every overlay
const BASE_CLASS: &str = "overlay";

/// Modifier class applied while shown
const SHOW_CLASS: &str = "show";

/// Caller configuration for an overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayConfig {
    pub max_width: u32,
    pub test_id: String,
    /// Render children directly instead of inside the max-width container
    pub custom_overlay: bool,
    pub scrollable: bool,
    pub class_name: Option<String>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            test_id: test_id::OVERLAY.to_string(),
            custom_overlay: false,
            scrollable: true,
            class_name: None,
        }
    }
}

impl OverlayConfig {
    pub fn max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = test_id.into();
        self
    }

    pub fn custom_overlay(mut self, custom_overlay: bool) -> Self {
        self.custom_overlay = custom_overlay;
        self
    }

    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// The default max-width wrapper around overlay children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerLayout {
    pub max_width: u32,
    pub test_id: String,
}

impl ContainerLayout {
    pub fn new(max_width: u32, owner_test_id: &str) -> Self {
        Self {
            max_width,
            test_id: test_id::container(owner_test_id),
        }
    }
}

/// What goes into the content region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayBody {
    /// Children suspended; only the chrome is drawn
    Empty,
    /// Children rendered as given
    Custom,
    /// Children wrapped in the max-width container
    Contained(ContainerLayout),
}

/// Everything the renderer needs to draw one overlay frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLayout {
    pub class_name: String,
    pub children_test_id: String,
    pub scrollable: bool,
    pub body: OverlayBody,
}

impl OverlayLayout {
    pub fn plan(lifecycle: &OverlayLifecycle, config: &OverlayConfig) -> Self {
        let body = if !lifecycle.render_state().is_rendering() {
            OverlayBody::Empty
        } else if config.custom_overlay {
            OverlayBody::Custom
        } else {
            OverlayBody::Contained(ContainerLayout::new(config.max_width, &config.test_id))
        };

        Self {
            class_name: class_name(lifecycle.visibility(), config.class_name.as_deref()),
            children_test_id: test_id::children(&config.test_id),
            scrollable: config.scrollable,
            body,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.class_name.split(' ').any(|c| c == SHOW_CLASS)
    }
}

fn class_name(visible: Visibility, extra: Option<&str>) -> String {
    let mut classes = vec![BASE_CLASS];
    if visible.is_shown() {
        classes.push(SHOW_CLASS);
    }
    if let Some(extra) = extra.filter(|c| !c.is_empty()) {
        classes.push(extra);
    }
    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn shown() -> OverlayLifecycle {
        OverlayLifecycle::new(Visibility::Shown, Instant::now())
    }

    #[test]
    fn test_defaults() {
        let config = OverlayConfig::default();
        assert_eq!(config.max_width, 800);
        assert_eq!(config.test_id, "overlay");
        assert!(!config.custom_overlay);
        assert!(config.scrollable);
        assert_eq!(config.class_name, None);
    }

    #[test]
    fn test_default_wraps_children_in_container() {
        let config = OverlayConfig::default().max_width(400).test_id("edit-label");
        let layout = OverlayLayout::plan(&shown(), &config);
        assert_eq!(
            layout.body,
            OverlayBody::Contained(ContainerLayout {
                max_width: 400,
                test_id: "edit-label--container".to_string(),
            })
        );
        assert_eq!(layout.children_test_id, "edit-label--children");
    }

    #[test]
    fn test_custom_overlay_never_wraps() {
        let config = OverlayConfig::default().custom_overlay(true).max_width(1000);
        let layout = OverlayLayout::plan(&shown(), &config);
        assert_eq!(layout.body, OverlayBody::Custom);
    }

    #[test]
    fn test_suspended_renders_empty_body_but_keeps_chrome() {
        let lc = OverlayLifecycle::new(Visibility::Hidden, Instant::now());
        let layout = OverlayLayout::plan(&lc, &OverlayConfig::default());
        assert_eq!(layout.body, OverlayBody::Empty);
        assert_eq!(layout.class_name, "overlay");
        assert_eq!(layout.children_test_id, "overlay--children");
    }

    #[test]
    fn test_class_composition() {
        let config = OverlayConfig::default().class_name("label-overlay");
        let layout = OverlayLayout::plan(&shown(), &config);
        assert_eq!(layout.class_name, "overlay show label-overlay");
        assert!(layout.is_shown());

        let hidden = OverlayLifecycle::new(Visibility::Hidden, Instant::now());
        let layout = OverlayLayout::plan(&hidden, &config);
        assert_eq!(layout.class_name, "overlay label-overlay");
        assert!(!layout.is_shown());
    }

    #[test]
    fn test_hiding_keeps_children_but_drops_show_class() {
        let t0 = Instant::now();
        let mut lc = OverlayLifecycle::new(Visibility::Shown, t0);
        lc.set_visible(Visibility::Hidden, t0);
        let layout = OverlayLayout::plan(&lc, &OverlayConfig::default());
        assert_eq!(layout.class_name, "overlay");
        assert!(matches!(layout.body, OverlayBody::Contained(_)));
    }
}
