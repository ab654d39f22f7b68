//! Exporters from the finalized SVG document to the on-disk formats. Failures
//! propagate and abort the current figure; earlier outputs stay on disk.

#[cfg(feature = "png")]
use crate::canvas::PX_PER_UNIT;
use anyhow::Result;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to parse generated SVG")]
    SvgParse,
    #[error("failed to allocate {width}x{height} pixmap")]
    PixmapAlloc { width: u32, height: u32 },
    #[error("failed to encode PNG")]
    PngEncode,
    #[error("failed to convert SVG to PDF")]
    PdfConvert,
}

#[cfg(feature = "png")]
pub fn write_png(svg: &str, path: &Path, dpi: f32) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = "Georgia".to_string();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| ExportError::SvgParse)?;
    // Raster zoom over the 72 px/unit vector output.
    let zoom = dpi / PX_PER_UNIT;
    let size = tree.size();
    let width = (size.width() * zoom).round().max(1.0) as u32;
    let height = (size.height() * zoom).round().max(1.0) as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or(ExportError::PixmapAlloc { width, height })?;

    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(zoom, zoom),
        &mut pixmap.as_mut(),
    );
    pixmap.save_png(path).map_err(|_| ExportError::PngEncode)?;
    Ok(())
}

#[cfg(feature = "pdf")]
pub fn write_pdf(svg: &str, path: &Path) -> Result<()> {
    let mut opt = svg2pdf::usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = "Georgia".to_string();

    let tree = svg2pdf::usvg::Tree::from_str(svg, &opt).map_err(|_| ExportError::SvgParse)?;
    let pdf = svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|_| ExportError::PdfConvert)?;
    std::fs::write(path, pdf)?;
    Ok(())
}
