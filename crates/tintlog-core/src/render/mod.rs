//! Turning a [`LogLine`] into sink-ready output
//!
//! Two renderers share the same segment list:
//! - `AnsiRenderer`: inline escape codes for terminals
//! - `CssRenderer`: `%c` placeholders plus CSS style arguments for browser consoles

mod line;
mod ansi;
mod css;

pub use line::{timestamp_now, Field, LogLine, Segment};
pub use ansi::AnsiRenderer;
pub use css::CssRenderer;

use std::sync::Arc;

use crate::options::LoggerOptions;
use crate::palette::Target;

/// Console-ready output of a renderer
///
/// `styles` is empty for ANSI output. For CSS output it holds one entry per
/// `%c` placeholder in `text`, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    pub text: String,
    pub styles: Vec<String>,
}

/// Renders the formatted (styled) variant of a line
pub trait Renderer: Send + Sync + std::fmt::Debug {
    /// Target this renderer produces output for
    fn target(&self) -> Target;

    fn render(&self, line: &LogLine, options: &LoggerOptions) -> Rendered;
}

/// Type alias for an Arc-wrapped renderer
pub type SharedRenderer = Arc<dyn Renderer>;

/// Renderer for a target
pub fn renderer_for(target: Target) -> SharedRenderer {
    match target {
        Target::Server => Arc::new(AnsiRenderer),
        Target::Browser => Arc::new(CssRenderer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_for_target() {
        assert_eq!(renderer_for(Target::Server).target(), Target::Server);
        assert_eq!(renderer_for(Target::Browser).target(), Target::Browser);
    }
}
