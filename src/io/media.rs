// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading (images and videos).
//!
//! This module reads a picked media file into memory, sniffs its MIME type
//! from the file extension, and decodes an RGBA preview for image files so
//! the feed can display them.

use crate::models::project::MediaAsset;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

/// Decoded RGBA8 image data, ready to become an egui texture.
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// MIME type guessed from the file extension. Unknown extensions fall back
/// to `application/octet-stream`.
pub fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("avi") => "video/x-msvideo",
        Some("mkv") => "video/x-matroska",
        _ => "application/octet-stream",
    }
}

/// Read a media file into an in-memory asset, decoding a feed preview when
/// the file is an image.
pub fn load_media(path: &Path) -> Result<(MediaAsset, Option<DecodedImage>)> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let mime_type = mime_type_for(path);
    let original_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let preview = if mime_type.starts_with("image/") {
        match decode_preview(&bytes) {
            Ok(image) => Some(image),
            Err(e) => {
                // Keep the asset; the feed falls back to a placeholder tile.
                log::error!("Failed to decode preview for {}: {}", path.display(), e);
                None
            }
        }
    } else {
        None
    };

    let asset = MediaAsset {
        original_name,
        mime_type: mime_type.to_string(),
        bytes: Arc::new(bytes),
    };
    Ok((asset, preview))
}

/// Decode image bytes into RGBA8 pixel data.
pub fn decode_preview(bytes: &[u8]) -> Result<DecodedImage> {
    let image = image::load_from_memory(bytes).context("Unrecognized image data")?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_for_image_extensions() {
        assert_eq!(mime_type_for(Path::new("foto.png")), "image/png");
        assert_eq!(mime_type_for(Path::new("foto.jpg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("foto.jpeg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("anim.gif")), "image/gif");
    }

    #[test]
    fn test_mime_type_for_video_extensions() {
        assert_eq!(mime_type_for(Path::new("reel.mp4")), "video/mp4");
        assert_eq!(mime_type_for(Path::new("reel.webm")), "video/webm");
        assert_eq!(mime_type_for(Path::new("reel.mov")), "video/quicktime");
    }

    #[test]
    fn test_mime_type_ignores_extension_case() {
        assert_eq!(mime_type_for(Path::new("FOTO.PNG")), "image/png");
        assert_eq!(mime_type_for(Path::new("Reel.MP4")), "video/mp4");
    }

    #[test]
    fn test_mime_type_unknown_falls_back_to_octet_stream() {
        assert_eq!(
            mime_type_for(Path::new("informe.pdf")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_type_for(Path::new("sin_extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_decode_preview_roundtrip() {
        let source = image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]));
        let mut encoded = std::io::Cursor::new(Vec::new());
        source
            .write_to(&mut encoded, image::ImageFormat::Png)
            .unwrap();

        let decoded = decode_preview(encoded.get_ref()).unwrap();
        assert_eq!(decoded.width, 2);
        assert_eq!(decoded.height, 3);
        assert_eq!(decoded.pixels.len(), 2 * 3 * 4);
        assert_eq!(&decoded.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_decode_preview_rejects_garbage() {
        assert!(decode_preview(&[0u8; 16]).is_err());
    }
}
