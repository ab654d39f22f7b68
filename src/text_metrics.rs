//! Text width measurement for legend sizing and label backing boxes.
//!
//! Resolves a serif face through fontdb and sums glyph advances with
//! ttf-parser. When no face resolves (headless CI without fonts) a
//! deterministic per-character estimate keeps the generated geometry stable.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use ttf_parser::Face;

static MEASURER: Lazy<Mutex<TextMeasurer>> = Lazy::new(|| Mutex::new(TextMeasurer::new()));

const FALLBACK_RATIO: f32 = 0.5;

/// Width in px of the widest line of `text` at `font_size` (px).
pub fn text_width(text: &str, font_size: f32) -> f32 {
    if text.is_empty() || font_size <= 0.0 {
        return 0.0;
    }
    let Ok(mut guard) = MEASURER.lock() else {
        return estimate(text, font_size);
    };
    text.split('\n')
        .map(|line| guard.line_width(line, font_size))
        .fold(0.0, f32::max)
}

fn estimate(text: &str, font_size: f32) -> f32 {
    text.split('\n')
        .map(|line| line.chars().count() as f32 * font_size * FALLBACK_RATIO)
        .fold(0.0, f32::max)
}

struct TextMeasurer {
    face_data: Option<(Vec<u8>, u32)>,
    loaded: bool,
}

impl TextMeasurer {
    fn new() -> Self {
        Self {
            face_data: None,
            loaded: false,
        }
    }

    fn line_width(&mut self, line: &str, font_size: f32) -> f32 {
        let fallback = line.chars().count() as f32 * font_size * FALLBACK_RATIO;
        if !self.loaded {
            self.load();
        }
        let Some((data, index)) = &self.face_data else {
            return fallback;
        };
        let Ok(face) = Face::parse(data, *index) else {
            return fallback;
        };
        let scale = font_size / face.units_per_em().max(1) as f32;
        let char_fallback = font_size * 0.56;
        let mut width = 0.0f32;
        for ch in line.chars() {
            match face.glyph_index(ch) {
                Some(glyph) => {
                    let advance = face.glyph_hor_advance(glyph).unwrap_or(0);
                    if advance == 0 {
                        width += char_fallback;
                    } else {
                        width += advance as f32 * scale;
                    }
                }
                None => width += char_fallback,
            }
        }
        width
    }

    fn load(&mut self) {
        self.loaded = true;
        let mut db = Database::new();
        db.load_system_fonts();
        let query = Query {
            families: &[Family::Name("Georgia"), Family::Serif],
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let Some(id) = db.query(&query) else {
            return;
        };
        db.with_face_data(id, |data, index| {
            self.face_data = Some((data.to_vec(), index));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_zero_width() {
        assert_eq!(text_width("", 9.0), 0.0);
    }

    #[test]
    fn wider_text_measures_wider() {
        let short = text_width("LRP", 9.0);
        let long = text_width("Integrated Gradients", 9.0);
        assert!(long > short);
    }

    #[test]
    fn multiline_width_is_widest_line() {
        let widest = text_width("Integrated Gradients", 9.0);
        let block = text_width("Integrated Gradients\nLRP", 9.0);
        assert_eq!(block, widest);
    }

    #[test]
    fn measurement_is_deterministic() {
        assert_eq!(text_width("Anchors", 9.0), text_width("Anchors", 9.0));
    }
}
