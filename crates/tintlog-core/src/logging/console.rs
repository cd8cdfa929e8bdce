//! Console sinks

use std::sync::Arc;

use parking_lot::Mutex;

use crate::render::Rendered;

/// Destination for the formatted variant of a line
pub trait ConsoleSink: Send + Sync {
    fn write(&self, rendered: &Rendered);
}

/// Type alias for an Arc-wrapped console sink
pub type SharedConsole = Arc<dyn ConsoleSink>;

/// Writes to stdout
///
/// Style arguments are dropped; terminals get their styling inline from the
/// ANSI renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for StdConsole {
    fn write(&self, rendered: &Rendered) {
        println!("{}", rendered.text);
    }
}

/// Records every console call
///
/// Useful for testing or for forwarding lines to a host-provided console.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    calls: Mutex<Vec<Rendered>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded calls, oldest first
    pub fn calls(&self) -> Vec<Rendered> {
        self.calls.lock().clone()
    }

    /// Recorded line texts, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.calls.lock().iter().map(|call| call.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl ConsoleSink for MemoryConsole {
    fn write(&self, rendered: &Rendered) {
        self.calls.lock().push(rendered.clone());
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::prelude::*;

    use super::ConsoleSink;
    use crate::render::Rendered;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console, js_name = log, variadic)]
        fn console_log(template: &str, styles: &[JsValue]);
    }

    /// Calls `console.log(template, ...styles)`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserConsole;

    impl ConsoleSink for BrowserConsole {
        fn write(&self, rendered: &Rendered) {
            let styles: Vec<JsValue> = rendered
                .styles
                .iter()
                .map(|style| JsValue::from_str(style))
                .collect();
            console_log(&rendered.text, &styles);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserConsole;

/// Console sink for the current build
pub fn default_console() -> SharedConsole {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(BrowserConsole)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(StdConsole)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(text: &str) -> Rendered {
        Rendered {
            text: text.to_string(),
            styles: vec!["color:Black".to_string()],
        }
    }

    #[test]
    fn test_memory_console_records_in_order() {
        let console = MemoryConsole::new();
        assert!(console.is_empty());

        console.write(&rendered("one"));
        console.write(&rendered("two"));

        assert_eq!(console.len(), 2);
        assert_eq!(console.lines(), vec!["one".to_string(), "two".to_string()]);
        assert_eq!(console.calls()[0].styles, vec!["color:Black".to_string()]);

        console.clear();
        assert!(console.is_empty());
    }

    #[test]
    fn test_std_console_writes() {
        // This test just verifies the sink doesn't panic
        StdConsole::new().write(&rendered("stdout line"));
        default_console().write(&rendered("default line"));
    }
}
