//! Browser console renderer (`%c` + CSS)

use super::{Field, LogLine, Rendered, Renderer};
use crate::options::LoggerOptions;
use crate::palette::{Color, Target};

/// Style argument for the message placeholder, passed whether or not colors are on
const MESSAGE_STYLE: &str = ": ";

/// Emits a `%c` template and one CSS string per placeholder
///
/// Placeholders are always emitted; with `use_colors` off every style except
/// the message's is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssRenderer;

impl Renderer for CssRenderer {
    fn target(&self) -> Target {
        Target::Browser
    }

    fn render(&self, line: &LogLine, options: &LoggerOptions) -> Rendered {
        let colors = options.use_colors;
        let mut text = String::new();
        let mut styles = Vec::with_capacity(line.segments().len());

        for segment in line.segments() {
            let style = match segment.field {
                Field::Timestamp => {
                    text.push_str("%c");
                    colors.then(|| format!("color:{}", Color::Grey.css()))
                }
                Field::Level(level) => {
                    text.push_str("%c");
                    colors.then(|| format!("color:{}", Color::for_level(level).css()))
                }
                Field::Category => {
                    text.push_str("%c");
                    colors.then(|| format!("color:{}; font-weight: bold", options.color.css()))
                }
                Field::Message => {
                    text.push_str(": %c");
                    Some(MESSAGE_STYLE.to_string())
                }
            };
            styles.push(style.unwrap_or_default());
            text.push_str(&segment.content);
        }

        Rendered { text, styles }
    }
}
