//! Figure 3: categorization of explainability approaches along three
//! dimensions (timing, scope, model access), three levels deep. The only
//! branch in the whole generator lives here: a static lookup deciding white
//! vs dark label text from the box fill.

use super::Figure;
use crate::canvas::{Anchors, Canvas, Corner, LegendEntry, NodeStyle, Point, TextStyle, pt};
use crate::connector;
use crate::palette::Palette;

const TIMING: &str = "#3498DB";
const SCOPE: &str = "#27AE60";
const ACCESS: &str = "#E67E22";

pub fn build(palette: &Palette) -> Figure {
    let mut canvas = Canvas::new(14.0, 8.0, &palette.background);

    let root = draw_box(
        &mut canvas,
        pt(7.0, 7.3),
        "Explainability Approaches",
        &palette.root,
        4.0,
        0.65,
        13.0,
        true,
        palette,
    );

    let timing = draw_box(&mut canvas, pt(2.5, 5.8), "By Timing", TIMING, 2.0, 0.55, 10.0, true, palette);
    let scope = draw_box(&mut canvas, pt(7.0, 5.8), "By Scope", SCOPE, 2.0, 0.55, 10.0, true, palette);
    let access = draw_box(
        &mut canvas,
        pt(11.5, 5.8),
        "By Model Access",
        ACCESS,
        2.4,
        0.55,
        10.0,
        true,
        palette,
    );

    connector::elbow(&mut canvas, root.bottom, timing.top, "#5D6D7E", 1.5);
    connector::straight(&mut canvas, root.bottom, scope.top, "#5D6D7E", 1.5);
    connector::elbow(&mut canvas, root.bottom, access.top, "#5D6D7E", 1.5);

    // Subcategories.
    let direct = sub_box(&mut canvas, pt(1.5, 4.3), "Direct\nInterpretability", "#AED6F1", 1.8, palette);
    let posthoc = sub_box(&mut canvas, pt(3.5, 4.3), "Post-hoc\nExplanation", "#AED6F1", 1.8, palette);
    connector::elbow(&mut canvas, timing.bottom, direct.top, TIMING, 1.2);
    connector::elbow(&mut canvas, timing.bottom, posthoc.top, TIMING, 1.2);

    let local = sub_box(&mut canvas, pt(6.0, 4.3), "Local\n(Per Instance)", "#A9DFBF", 1.8, palette);
    let global = sub_box(&mut canvas, pt(8.0, 4.3), "Global\n(Model-Wide)", "#A9DFBF", 1.8, palette);
    connector::elbow(&mut canvas, scope.bottom, local.top, SCOPE, 1.2);
    connector::elbow(&mut canvas, scope.bottom, global.top, SCOPE, 1.2);

    let specific = sub_box(&mut canvas, pt(10.5, 4.3), "Model-\nSpecific", "#FAD7A0", 1.7, palette);
    let agnostic = sub_box(&mut canvas, pt(12.5, 4.3), "Model-\nAgnostic", "#FAD7A0", 1.7, palette);
    connector::elbow(&mut canvas, access.bottom, specific.top, ACCESS, 1.2);
    connector::elbow(&mut canvas, access.bottom, agnostic.top, ACCESS, 1.2);

    // Example leaves.
    let examples: [(&Anchors, f32, &str, f32, &str); 6] = [
        (&direct, 1.5, "Decision Trees\nLinear Models\nRule Lists", 1.7, "#85C1E9"),
        (&posthoc, 3.5, "LIME\nSHAP\nAnchors", 1.7, "#85C1E9"),
        (&local, 6.0, "Feature Attribution\nCounterfactuals\nInfluence Functions", 2.0, "#58D68D"),
        (&global, 8.0, "Model Distillation\nProbing Classifiers\nTCAV", 2.0, "#58D68D"),
        (&specific, 10.5, "Attention Viz\nLRP\nDeepLIFT", 1.7, "#F5B041"),
        (&agnostic, 12.5, "LIME\nSHAP\nAnchors", 1.7, "#F5B041"),
    ];
    for (parent, x, text, width, line_color) in examples {
        let leaf = example_box(&mut canvas, pt(x, 2.8), text, width, palette);
        connector::straight(&mut canvas, parent.bottom, leaf.top, line_color, 1.2);
    }

    canvas.legend(
        &[
            LegendEntry {
                fill: TIMING.to_string(),
                border: "#2C3E50".to_string(),
                hatch: None,
                label: "By Timing".to_string(),
            },
            LegendEntry {
                fill: SCOPE.to_string(),
                border: "#2C3E50".to_string(),
                hatch: None,
                label: "By Scope".to_string(),
            },
            LegendEntry {
                fill: ACCESS.to_string(),
                border: "#2C3E50".to_string(),
                hatch: None,
                label: "By Model Access".to_string(),
            },
        ],
        Corner::LowerRight,
        9.0,
        "#2C3E50",
        "#2C3E50",
    );

    Figure {
        name: "explainability_approaches",
        canvas,
    }
}

/// Dark fills take white text; the light subcategory/example fills keep the
/// dark slate text. Static lookup over the fixed set of fills in this figure.
fn text_color_for(fill: &str, palette: &Palette) -> &'static str {
    if fill == palette.root || matches!(fill, TIMING | SCOPE | ACCESS) {
        "#FFFFFF"
    } else {
        "#2C3E50"
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_box(
    canvas: &mut Canvas,
    center: Point,
    text: &str,
    fill: &str,
    width: f32,
    height: f32,
    font_size: f32,
    bold: bool,
    palette: &Palette,
) -> Anchors {
    let mut label = TextStyle::new(font_size, text_color_for(fill, palette));
    if bold {
        label = label.bold();
    }
    let style = NodeStyle {
        fill: fill.to_string(),
        stroke: "#2C3E50".to_string(),
        stroke_width: 1.3,
        corner_radius: 0.12,
        pad: 0.03,
        text: label,
        class: "approach",
        z: 10,
    };
    canvas.node_box(center, width, height, text, &style)
}

fn sub_box(
    canvas: &mut Canvas,
    center: Point,
    text: &str,
    fill: &str,
    width: f32,
    palette: &Palette,
) -> Anchors {
    draw_box(canvas, center, text, fill, width, 0.65, 8.0, false, palette)
}

fn example_box(
    canvas: &mut Canvas,
    center: Point,
    text: &str,
    width: f32,
    palette: &Palette,
) -> Anchors {
    draw_box(canvas, center, text, "#F8F9F9", width, 0.85, 7.0, false, palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_levels_are_complete() {
        let palette = Palette::survey_default();
        let svg = build(&palette).svg();
        // 1 root + 3 dimensions + 6 subcategories + 6 example boxes
        assert_eq!(svg.matches("class=\"approach\"").count(), 16);
    }

    #[test]
    fn text_color_lookup_is_static() {
        let palette = Palette::survey_default();
        assert_eq!(text_color_for(&palette.root, &palette), "#FFFFFF");
        assert_eq!(text_color_for(TIMING, &palette), "#FFFFFF");
        assert_eq!(text_color_for("#AED6F1", &palette), "#2C3E50");
        assert_eq!(text_color_for("#F8F9F9", &palette), "#2C3E50");
    }

    #[test]
    fn legend_colors_are_used_by_the_figure() {
        let palette = Palette::survey_default();
        let svg = build(&palette).svg();
        for color in [TIMING, SCOPE, ACCESS] {
            // dimension box fill + connector strokes + legend swatch
            assert!(svg.matches(color).count() >= 2, "{color} unused");
        }
    }
}
