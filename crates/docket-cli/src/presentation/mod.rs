pub mod formatters;
pub mod renderer;
pub mod views;

pub use formatters::{MISSING_EVENT_DETAILS, VariantFormatters};
pub use renderer::Renderer;
pub use views::{JsonView, TIMELINE_HEADER, TimelineView, TsvView};

/// Display formatting options
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub enable_color: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { enable_color: true }
    }
}
