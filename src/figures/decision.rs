//! Figure 2: method-selection flowchart. A start capsule feeds a model-access
//! decision with three branches; recommendation boxes hang off elbow arrows,
//! and an informational audience panel spans the bottom.

use super::Figure;
use crate::canvas::{Anchors, Canvas, Corner, LegendEntry, NodeStyle, Point, TextStyle, pt};
use crate::connector::{self, ArrowStyle, LabelPos};
use crate::palette::Palette;

pub fn build(palette: &Palette) -> Figure {
    let mut canvas = Canvas::new(15.0, 10.0, &palette.background);
    let arrows = ArrowStyle {
        color: palette.arrow.clone(),
        width: 1.8,
        label_color: "#2C3E50".to_string(),
    };

    let start = draw_start(&mut canvas, pt(7.5, 9.3), "Select XAI Method");

    let d1 = draw_diamond(&mut canvas, pt(7.5, 7.8), "Model\nAccess?", palette);
    connector::arrow(&mut canvas, start.bottom, d1.top, None, &arrows);

    // Full-access branch, far left.
    let d2_full = draw_diamond(&mut canvas, pt(2.8, 6.0), "Explanation\nScope?", palette);
    connector::elbow_arrow(
        &mut canvas,
        d1.left,
        2.8,
        d2_full.top,
        Some("Full Access"),
        LabelPos::Start,
        &arrows,
    );

    let r_local = draw_rect(
        &mut canvas,
        pt(1.3, 4.0),
        "Integrated Gradients\nAttention\nSHAP",
        "#3498DB",
        2.0,
        0.9,
    );
    connector::elbow_arrow(
        &mut canvas,
        d2_full.left,
        1.3,
        r_local.top,
        Some("Local"),
        LabelPos::Start,
        &arrows,
    );

    let r_global = draw_rect(
        &mut canvas,
        pt(3.8, 4.0),
        "Probing Classifiers\nTCAV\nDistillation",
        "#27AE60",
        2.0,
        0.9,
    );
    connector::elbow_arrow(
        &mut canvas,
        d2_full.right,
        3.8,
        r_global.top,
        Some("Global"),
        LabelPos::Start,
        &arrows,
    );

    // API-only branch, centered.
    let d2_api = draw_diamond(&mut canvas, pt(7.5, 6.0), "Is it\nan LLM?", palette);
    connector::arrow(&mut canvas, d1.bottom, d2_api.top, Some("API Only"), &arrows);

    let r_llm_yes = draw_rect(
        &mut canvas,
        pt(6.5, 4.0),
        "Chain-of-Thought\nSelf-Explanation",
        "#E67E22",
        2.0,
        0.8,
    );
    connector::elbow_arrow(
        &mut canvas,
        d2_api.left,
        6.5,
        r_llm_yes.top,
        Some("Yes"),
        LabelPos::Start,
        &arrows,
    );

    let r_llm_no = draw_rect(&mut canvas, pt(9.0, 4.0), "LIME\nAnchors", &palette.recommend, 1.6, 0.7);
    connector::elbow_arrow(
        &mut canvas,
        d2_api.right,
        9.0,
        r_llm_no.top,
        Some("No"),
        LabelPos::Start,
        &arrows,
    );

    // Black-box branch, far right.
    let r_blackbox = draw_rect(
        &mut canvas,
        pt(12.5, 6.0),
        "LIME\nCounterfactuals\nAnchors",
        "#8E44AD",
        2.0,
        0.9,
    );
    connector::elbow_arrow(
        &mut canvas,
        d1.right,
        12.5,
        r_blackbox.top,
        Some("Black-box"),
        LabelPos::Start,
        &arrows,
    );

    draw_audience_panel(&mut canvas);

    canvas.legend(
        &[
            LegendEntry {
                fill: palette.decision.clone(),
                border: "#2C3E50".to_string(),
                hatch: None,
                label: "Decision Point".to_string(),
            },
            LegendEntry {
                fill: palette.recommend.clone(),
                border: "#2C3E50".to_string(),
                hatch: None,
                label: "Recommendation".to_string(),
            },
        ],
        Corner::UpperRight,
        8.0,
        "#2C3E50",
        "#2C3E50",
    );

    canvas.text(
        pt(7.5, 0.25),
        "Figure 2: Decision Tree for Selecting Explainability Methods",
        &TextStyle::new(11.0, "#2C3E50").italic().z(2),
    );

    Figure {
        name: "decision_tree",
        canvas,
    }
}

fn draw_start(canvas: &mut Canvas, center: Point, text: &str) -> Anchors {
    let style = NodeStyle {
        fill: "#27AE60".to_string(),
        stroke: "#2C3E50".to_string(),
        stroke_width: 2.0,
        corner_radius: 0.35,
        pad: 0.02,
        text: TextStyle::new(11.0, "#FFFFFF").bold(),
        class: "terminal",
        z: 10,
    };
    canvas.capsule(center, 3.0, 0.8, text, &style)
}

fn draw_diamond(canvas: &mut Canvas, center: Point, text: &str, palette: &Palette) -> Anchors {
    let style = NodeStyle {
        fill: palette.decision.clone(),
        stroke: "#2C3E50".to_string(),
        stroke_width: 1.5,
        corner_radius: 0.0,
        pad: 0.0,
        text: TextStyle::new(8.0, "#2C3E50").bold(),
        class: "decision",
        z: 10,
    };
    canvas.diamond(center, 0.7, text, &style)
}

fn draw_rect(
    canvas: &mut Canvas,
    center: Point,
    text: &str,
    color: &str,
    width: f32,
    height: f32,
) -> Anchors {
    let style = NodeStyle {
        fill: color.to_string(),
        stroke: "#2C3E50".to_string(),
        stroke_width: 1.3,
        corner_radius: 0.12,
        pad: 0.02,
        text: TextStyle::new(7.5, "#FFFFFF").bold(),
        class: "recommend",
        z: 10,
    };
    canvas.node_box(center, width, height, text, &style)
}

fn draw_audience_panel(canvas: &mut Canvas) {
    canvas.panel(pt(0.5, 0.8), 14.0, 2.2, 0.2, "#F8F9F9", 1.0, "#BDC3C7", 1.5, 1);
    canvas.text(
        pt(7.5, 2.65),
        "Tailor Explanations to Target Audience",
        &TextStyle::new(10.0, "#2C3E50").bold().z(10),
    );

    let audiences: [(f32, f32, &str, &str, &str); 4] = [
        (2.0, 1.5, "End Users", "Simple highlights\nNatural language", "#1ABC9C"),
        (5.5, 1.5, "Domain Experts", "Feature importance\nDomain terms", "#3498DB"),
        (9.5, 1.5, "ML Practitioners", "Gradients\nAttention maps", "#E74C3C"),
        (13.0, 1.5, "Regulators", "Auditable\nMethodology", "#95A5A6"),
    ];
    for (x, y, title, desc, color) in audiences {
        let style = NodeStyle {
            fill: color.to_string(),
            stroke: "#2C3E50".to_string(),
            stroke_width: 1.2,
            corner_radius: 0.1,
            pad: 0.02,
            text: TextStyle::new(8.0, "#FFFFFF").bold(),
            class: "audience",
            z: 10,
        };
        canvas.node_box(pt(x, y + 0.4), 2.4, 0.5, title, &style);
        canvas.text(
            pt(x, y - 0.25),
            desc,
            &TextStyle::new(7.0, "#2C3E50").z(10),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flowchart_census() {
        let palette = Palette::survey_default();
        let svg = build(&palette).svg();
        assert_eq!(svg.matches("class=\"terminal\"").count(), 1);
        assert_eq!(svg.matches("class=\"decision\"").count(), 3);
        assert_eq!(svg.matches("class=\"recommend\"").count(), 5);
        assert_eq!(svg.matches("class=\"audience\"").count(), 4);
    }

    #[test]
    fn branch_labels_present() {
        let palette = Palette::survey_default();
        let svg = build(&palette).svg();
        for label in ["Full Access", "API Only", "Black-box", "Local", "Global", "Yes", "No"] {
            assert!(svg.contains(label), "missing branch label {label}");
        }
    }

    #[test]
    fn legend_colors_are_used_by_the_figure() {
        let palette = Palette::survey_default();
        let svg = build(&palette).svg();
        // decision diamonds + legend swatch; recommendation box + legend swatch
        assert!(svg.matches(palette.decision.as_str()).count() >= 2);
        assert!(svg.matches(palette.recommend.as_str()).count() >= 2);
    }
}
