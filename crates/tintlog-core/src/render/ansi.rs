//! ANSI escape code renderer

use std::fmt::Write;

use super::{Field, LogLine, Rendered, Renderer};
use crate::options::LoggerOptions;
use crate::palette::{Color, Target};

const RESET: &str = "\u{1b}[0m";

/// Embeds escape codes directly in the line
///
/// With `use_colors` off the output equals [`LogLine::plain`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl Renderer for AnsiRenderer {
    fn target(&self) -> Target {
        Target::Server
    }

    fn render(&self, line: &LogLine, options: &LoggerOptions) -> Rendered {
        let colors = options.use_colors;
        let mut text = String::new();

        for segment in line.segments() {
            match segment.field {
                Field::Timestamp => {
                    if colors {
                        let _ = write!(text, "\u{1b}[3{}m", Color::Grey.ansi());
                    }
                }
                Field::Level(level) => {
                    if colors {
                        let _ = write!(text, "\u{1b}[3{};22m", Color::for_level(level).ansi());
                    }
                }
                Field::Category => {
                    if colors {
                        let _ = write!(text, "\u{1b}[3{};1m", options.color.ansi());
                    }
                }
                Field::Message => {
                    if colors {
                        text.push_str(RESET);
                    }
                    text.push_str(": ");
                }
            }
            text.push_str(&segment.content);
        }

        Rendered {
            text,
            styles: Vec::new(),
        }
    }
}
