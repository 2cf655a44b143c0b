/// PNG encoding of framebuffer contents
use image::{ColorType, ImageFormat};
use std::io::Cursor;
use std::path::Path;
use wire3d_core::{Framebuffer, RenderError};

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("encoding error: {0}")]
    Encoding(#[from] image::ImageError),

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

/// Encode `framebuffer` as an in-memory PNG
pub fn encode_png(framebuffer: &Framebuffer) -> Result<Vec<u8>, ExportError> {
    let rgb = framebuffer.export_bytes()?;
    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        &rgb,
        framebuffer.width(),
        framebuffer.height(),
        ColorType::Rgb8,
        ImageFormat::Png,
    )?;
    Ok(out.into_inner())
}

/// Encode `framebuffer` as PNG and write it to `path`
pub fn save_png(framebuffer: &Framebuffer, path: &Path) -> Result<(), ExportError> {
    let png = encode_png(framebuffer)?;
    std::fs::write(path, &png)?;
    tracing::debug!(path = %path.display(), bytes = png.len(), "png written");
    Ok(())
}
