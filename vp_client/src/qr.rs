//! QR renderers backed by the `qrcode` crate.
//!
//! Built only with the `qr` feature. Without it [`terminal`] and [`svg`]
//! return `None` and the table shows its fallback notice.

use virtual_poker::QrRenderer;

#[cfg(feature = "qr")]
mod backend {
    use qrcode::{
        EcLevel, QrCode,
        render::{svg, unicode},
        types::QrError as CodeError,
    };
    use virtual_poker::{QrError, QrOptions, QrRenderer, session::ErrorCorrection};

    fn encode(text: &str, options: &QrOptions) -> Result<QrCode, QrError> {
        let level = match options.correction {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        };
        QrCode::with_error_correction_level(text.as_bytes(), level).map_err(|e| match e {
            CodeError::DataTooLong => QrError::DataTooLong(text.len()),
            other => QrError::Render(other.to_string()),
        })
    }

    /// Half-height block characters, two modules per terminal cell. Colors
    /// are inverted for dark terminal backgrounds.
    pub struct TerminalQr;

    impl QrRenderer for TerminalQr {
        fn render(&self, text: &str, options: &QrOptions) -> Result<String, QrError> {
            Ok(encode(text, options)?
                .render::<unicode::Dense1x2>()
                .dark_color(unicode::Dense1x2::Light)
                .light_color(unicode::Dense1x2::Dark)
                .build())
        }
    }

    /// SVG markup sized and colored from the options.
    pub struct SvgQr;

    impl QrRenderer for SvgQr {
        fn render(&self, text: &str, options: &QrOptions) -> Result<String, QrError> {
            Ok(encode(text, options)?
                .render::<svg::Color<'_>>()
                .min_dimensions(options.size, options.size)
                .dark_color(svg::Color(&options.dark_color))
                .light_color(svg::Color(&options.light_color))
                .build())
        }
    }
}

#[cfg(feature = "qr")]
pub use backend::{SvgQr, TerminalQr};

/// Renderer for drawing in the terminal, if one was compiled in.
pub fn terminal() -> Option<Box<dyn QrRenderer>> {
    #[cfg(feature = "qr")]
    {
        Some(Box::new(TerminalQr))
    }
    #[cfg(not(feature = "qr"))]
    {
        None
    }
}

/// Renderer for HTML output, if one was compiled in.
pub fn svg() -> Option<Box<dyn QrRenderer>> {
    #[cfg(feature = "qr")]
    {
        Some(Box::new(SvgQr))
    }
    #[cfg(not(feature = "qr"))]
    {
        None
    }
}

#[cfg(all(test, feature = "qr"))]
mod tests {
    use super::*;
    use virtual_poker::{QrError, QrOptions};

    const URL: &str = "http://localhost:8080/?table=1a2b3c4d";

    #[test]
    fn test_terminal_renders_blocks() {
        let code = TerminalQr
            .render(URL, &QrOptions::default())
            .expect("short url fits");
        assert!(code.lines().count() > 10);
        assert!(code.contains('█') || code.contains('▀') || code.contains('▄'));
    }

    #[test]
    fn test_svg_uses_options() {
        let code = SvgQr.render(URL, &QrOptions::default()).expect("short url fits");
        assert!(code.contains("<svg"));
        assert!(code.contains("#0d0d0d"));
        assert!(code.contains("#ffffff"));
    }

    #[test]
    fn test_data_too_long() {
        let long = "x".repeat(5000);
        let err = TerminalQr.render(&long, &QrOptions::default()).unwrap_err();
        assert_eq!(err, QrError::DataTooLong(5000));
    }

    #[test]
    fn test_renderers_available() {
        assert!(terminal().is_some());
        assert!(svg().is_some());
    }
}
