//! QR panel for the share link.
//!
//! Drawing the code is an injected capability: callers hand in a
//! [`QrRenderer`] if they have one, and the panel degrades to a text
//! notice when they don't.

use serde::{Deserialize, Serialize};

use super::errors::QrError;

/// Shown in place of the code when no renderer is available.
pub const QR_UNAVAILABLE: &str = "QR generator not available.";

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    High,
}

/// Rendering hints. Renderers may ignore what they can't express, e.g. a
/// terminal renderer has no use for pixel sizes.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct QrOptions {
    /// Edge length in pixels
    pub size: u32,
    pub dark_color: String,
    pub light_color: String,
    pub correction: ErrorCorrection,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            size: 180,
            dark_color: "#0d0d0d".to_string(),
            light_color: "#ffffff".to_string(),
            correction: ErrorCorrection::High,
        }
    }
}

/// Something that can draw a scannable code for a piece of text.
pub trait QrRenderer {
    /// Render `text` to an opaque image representation, such as block
    /// characters or SVG markup.
    fn render(&self, text: &str, options: &QrOptions) -> Result<String, QrError>;
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum QrContent {
    Code(String),
    Unavailable(String),
}

/// The share link as literal text plus its code (or the fallback notice).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct QrPanel {
    pub url: String,
    pub content: QrContent,
}

impl QrPanel {
    pub fn build(url: String, renderer: Option<&dyn QrRenderer>, options: &QrOptions) -> Self {
        let content = match renderer {
            Some(renderer) => match renderer.render(&url, options) {
                Ok(code) => QrContent::Code(code),
                Err(e) => {
                    log::warn!("QR rendering failed for {url}: {e}");
                    QrContent::Unavailable(QR_UNAVAILABLE.to_string())
                }
            },
            None => {
                log::warn!("No QR renderer available, showing link only");
                QrContent::Unavailable(QR_UNAVAILABLE.to_string())
            }
        };
        Self { url, content }
    }

    pub fn has_code(&self) -> bool {
        matches!(self.content, QrContent::Code(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoRenderer;

    impl QrRenderer for EchoRenderer {
        fn render(&self, text: &str, options: &QrOptions) -> Result<String, QrError> {
            Ok(format!("[{}px {text}]", options.size))
        }
    }

    struct FailingRenderer;

    impl QrRenderer for FailingRenderer {
        fn render(&self, text: &str, _options: &QrOptions) -> Result<String, QrError> {
            Err(QrError::DataTooLong(text.len()))
        }
    }

    const URL: &str = "http://localhost:8080/?table=cafebabe";

    #[test]
    fn test_panel_with_renderer() {
        let panel = QrPanel::build(URL.to_string(), Some(&EchoRenderer), &QrOptions::default());
        assert_eq!(panel.url, URL);
        assert_eq!(panel.content, QrContent::Code(format!("[180px {URL}]")));
        assert!(panel.has_code());
    }

    #[test]
    fn test_panel_without_renderer_falls_back() {
        let panel = QrPanel::build(URL.to_string(), None, &QrOptions::default());
        assert_eq!(panel.url, URL);
        assert_eq!(panel.content, QrContent::Unavailable(QR_UNAVAILABLE.to_string()));
        assert!(!panel.has_code());
    }

    #[test]
    fn test_panel_renderer_error_falls_back() {
        let panel = QrPanel::build(URL.to_string(), Some(&FailingRenderer), &QrOptions::default());
        assert!(!panel.has_code());
        assert_eq!(panel.url, URL);
    }

    #[test]
    fn test_default_options() {
        let options = QrOptions::default();
        assert_eq!(options.size, 180);
        assert_eq!(options.dark_color, "#0d0d0d");
        assert_eq!(options.light_color, "#ffffff");
        assert_eq!(options.correction, ErrorCorrection::High);
    }
}
