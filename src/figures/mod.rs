//! The four figure assembly routines. Each is a linear sequence of draw calls
//! at authored coordinates; the routines share nothing but the palette and
//! can run independently.

pub mod approaches;
pub mod decision;
pub mod taxonomy;
pub mod tradeoff;

use crate::canvas::Canvas;
use crate::config::RenderConfig;
use crate::palette::Palette;
use crate::render;
use anyhow::Result;
use std::path::Path;

pub struct Figure {
    pub name: &'static str,
    pub canvas: Canvas,
}

impl Figure {
    pub fn svg(&self) -> String {
        self.canvas.to_svg()
    }

    /// Writes `<name>.pdf` then `<name>.png` into `out_dir`.
    pub fn export(&self, out_dir: &Path, render_cfg: &RenderConfig) -> Result<()> {
        let svg = self.svg();
        #[cfg(feature = "pdf")]
        render::write_pdf(&svg, &out_dir.join(format!("{}.pdf", self.name)))?;
        #[cfg(feature = "png")]
        render::write_png(
            &svg,
            &out_dir.join(format!("{}.png", self.name)),
            render_cfg.raster_dpi,
        )?;
        #[cfg(not(all(feature = "pdf", feature = "png")))]
        let _ = (&svg, render_cfg);
        Ok(())
    }
}

/// All four figures in their fixed generation order.
pub fn all(palette: &Palette) -> Vec<Figure> {
    vec![
        taxonomy::build(palette),
        decision::build(palette),
        approaches::build(palette),
        tradeoff::build(palette),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_and_names_are_fixed() {
        let palette = Palette::survey_default();
        let names: Vec<&str> = all(&palette).iter().map(|figure| figure.name).collect();
        assert_eq!(
            names,
            [
                "taxonomy_diagram",
                "decision_tree",
                "explainability_approaches",
                "accuracy_interpretability",
            ]
        );
    }

    #[test]
    fn figures_render_deterministically() {
        let palette = Palette::survey_default();
        for (first, second) in all(&palette).iter().zip(all(&palette).iter()) {
            assert_eq!(first.svg(), second.svg());
        }
    }
}
