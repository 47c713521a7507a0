//! Rendering of the pairing challenge as a scannable image.

use base64::Engine as _;
use qrcode::render::svg;
use qrcode::QrCode;

use crate::error::{Error, Result};

/// Encode a raw QR challenge string as an SVG image data URL suitable for an
/// `<img src=...>` in the pairing UI.
pub fn challenge_to_data_url(challenge: &str) -> Result<String> {
    let code = QrCode::new(challenge.as_bytes()).map_err(|e| Error::Qr(e.to_string()))?;
    let image = code
        .render::<svg::Color>()
        .min_dimensions(256, 256)
        .build();
    let encoded = base64::engine::general_purpose::STANDARD.encode(image.as_bytes());
    Ok(format!("data:image/svg+xml;base64,{encoded}"))
}
