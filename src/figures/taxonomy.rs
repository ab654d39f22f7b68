//! Figure 1: flattened two-level taxonomy of explainable NLP methods. Root at
//! the top, three category boxes, 22 method leaves grouped over hatched
//! background regions (hatches keep the groups apart in grayscale print).

use super::Figure;
use crate::canvas::{
    Anchors, Canvas, Corner, Hatch, LegendEntry, NodeStyle, Point, TextStyle, pt,
};
use crate::connector;
use crate::palette::Palette;

const METHOD_Y: f32 = 2.5;

pub fn build(palette: &Palette) -> Figure {
    let mut canvas = Canvas::new(16.0, 8.0, &palette.background);

    // Background regions, one per category column.
    canvas.region(pt(0.5, 0.8), 5.0, 6.5, &palette.local_bg, 0.12, Hatch::Diagonal, -1);
    canvas.region(pt(5.5, 0.8), 5.0, 6.5, &palette.global_bg, 0.12, Hatch::Dots, -1);
    canvas.region(pt(10.5, 0.8), 5.0, 6.5, &palette.llm_bg, 0.12, Hatch::Cross, -1);

    let root = draw_root(&mut canvas, pt(8.0, 7.2), "Explainable NLP Methods", palette);

    let cat_y = 5.5;
    let local_cat = draw_category(
        &mut canvas,
        pt(3.0, cat_y),
        "Local Explanations\n(Single Prediction)",
        &palette.local,
        &palette.local_bg,
        &palette.local_border,
    );
    let global_cat = draw_category(
        &mut canvas,
        pt(8.0, cat_y),
        "Global Explanations\n(Model-Wide)",
        &palette.global,
        &palette.global_bg,
        &palette.global_border,
    );
    let llm_cat = draw_category(
        &mut canvas,
        pt(13.0, cat_y),
        "LLM-Era Methods",
        &palette.llm,
        &palette.llm_bg,
        &palette.llm_border,
    );

    connector::tree(
        &mut canvas,
        root.bottom,
        &[local_cat.top, global_cat.top, llm_cat.top],
        &palette.connector,
        2.0,
    );

    // Local methods: feature attribution, gradient-based, attention and
    // example-based rows.
    let local_methods = place_methods(
        &mut canvas,
        palette,
        &[
            (0.8, METHOD_Y + 0.6, "LIME"),
            (1.6, METHOD_Y + 0.6, "SHAP"),
            (2.4, METHOD_Y + 0.6, "Anchors"),
            (0.8, METHOD_Y, "Integrated\nGradients"),
            (1.8, METHOD_Y, "LRP"),
            (2.6, METHOD_Y, "DeepLIFT"),
            (3.5, METHOD_Y + 0.6, "Attention\nWeights"),
            (4.5, METHOD_Y + 0.6, "Attention\nRollout"),
            (3.5, METHOD_Y, "Counterfactual"),
            (4.5, METHOD_Y, "Contrastive"),
            (3.5, METHOD_Y - 0.6, "Influence\nFunctions"),
            (4.5, METHOD_Y - 0.6, "Prototypes"),
        ],
    );
    connector::tree(&mut canvas, local_cat.bottom, &tops(&local_methods), &palette.local, 1.8);

    let global_methods = place_methods(
        &mut canvas,
        palette,
        &[
            (6.5, METHOD_Y, "Rule\nExtraction"),
            (7.5, METHOD_Y, "SHAP\nGlobal"),
            (8.5, METHOD_Y, "TCAV"),
            (9.5, METHOD_Y, "Diagnostic\nClassifiers"),
        ],
    );
    connector::tree(&mut canvas, global_cat.bottom, &tops(&global_methods), &palette.global, 1.5);

    let llm_methods = place_methods(
        &mut canvas,
        palette,
        &[
            (11.5, METHOD_Y + 0.6, "Chain-of-Thought\nZero-shot"),
            (13.0, METHOD_Y + 0.6, "Chain-of-Thought\nFew-shot"),
            (11.5, METHOD_Y, "Self-Critique"),
            (13.0, METHOD_Y, "Rationale\nGeneration"),
            (12.2, METHOD_Y - 0.6, "Mechanistic\nCircuits"),
            (13.8, METHOD_Y - 0.6, "Feature\nAnalysis"),
        ],
    );
    connector::tree(&mut canvas, llm_cat.bottom, &tops(&llm_methods), &palette.llm, 1.5);

    canvas.legend(
        &[
            LegendEntry {
                fill: palette.local_bg.clone(),
                border: palette.local_border.clone(),
                hatch: Some(Hatch::Diagonal),
                label: "Local Methods".to_string(),
            },
            LegendEntry {
                fill: palette.global_bg.clone(),
                border: palette.global_border.clone(),
                hatch: Some(Hatch::Dots),
                label: "Global Methods".to_string(),
            },
            LegendEntry {
                fill: palette.llm_bg.clone(),
                border: palette.llm_border.clone(),
                hatch: Some(Hatch::Cross),
                label: "LLM-Era Methods".to_string(),
            },
        ],
        Corner::LowerRight,
        9.0,
        "#2C3E50",
        &palette.text_primary,
    );

    canvas.text(
        pt(8.0, 0.4),
        "Figure 4: Taxonomy of Explainable NLP Methods",
        &TextStyle::new(11.0, &palette.text_primary).italic().z(2),
    );

    Figure {
        name: "taxonomy_diagram",
        canvas,
    }
}

fn draw_root(canvas: &mut Canvas, center: Point, text: &str, palette: &Palette) -> Anchors {
    let style = NodeStyle {
        fill: palette.root.clone(),
        stroke: "#37474F".to_string(),
        stroke_width: 2.5,
        corner_radius: 0.3,
        pad: 0.3,
        text: TextStyle::new(11.0, "#FFFFFF").bold(),
        class: "root",
        z: 10,
    };
    canvas.node_box(center, 4.0, 0.8, text, &style)
}

fn draw_category(
    canvas: &mut Canvas,
    center: Point,
    text: &str,
    color: &str,
    bg: &str,
    border: &str,
) -> Anchors {
    let style = NodeStyle {
        fill: bg.to_string(),
        stroke: border.to_string(),
        stroke_width: 2.0,
        corner_radius: 0.25,
        pad: 0.25,
        text: TextStyle::new(11.0, color).bold(),
        class: "category",
        z: 8,
    };
    canvas.node_box(center, 3.6, 0.7, text, &style)
}

fn place_methods(
    canvas: &mut Canvas,
    palette: &Palette,
    methods: &[(f32, f32, &str)],
) -> Vec<Anchors> {
    methods
        .iter()
        .map(|(x, y, label)| canvas.method_label(pt(*x, *y), label, &palette.text_primary))
        .collect()
}

fn tops(anchors: &[Anchors]) -> Vec<Point> {
    anchors.iter().map(|a| a.top).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_census_matches_the_figure() {
        let palette = Palette::survey_default();
        let svg = build(&palette).svg();
        assert_eq!(svg.matches("class=\"root\"").count(), 1);
        assert_eq!(svg.matches("class=\"category\"").count(), 3);
        assert_eq!(svg.matches("class=\"method\"").count(), 22);
        // root->categories plus one group per category
        assert_eq!(svg.matches("class=\"tree-connector\"").count(), 4);
    }

    #[test]
    fn legend_colors_are_used_by_the_figure() {
        let palette = Palette::survey_default();
        let svg = build(&palette).svg();
        for color in [&palette.local_bg, &palette.global_bg, &palette.llm_bg] {
            // once for the background region, once for the legend swatch
            assert!(svg.matches(color.as_str()).count() >= 2, "{color} unused");
        }
    }
}
