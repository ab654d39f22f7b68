//! Connector helpers routing between shape anchor points. All geometry is in
//! figure units; segments are pushed at z = 1 so nodes draw over them.

use crate::canvas::{BoxedTextStyle, Canvas, Point, TextStyle, pt};

const CONNECTOR_Z: i32 = 1;
const ARROW_Z: i32 = 5;
const LABEL_SIZE: f32 = 7.5;

/// Where an elbow arrow places its label: over the horizontal run, or at the
/// midpoint of the vertical run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPos {
    Start,
    Mid,
}

#[derive(Debug, Clone)]
pub struct ArrowStyle {
    pub color: String,
    pub width: f32,
    pub label_color: String,
}

pub fn straight(canvas: &mut Canvas, start: Point, end: Point, color: &str, width: f32) {
    canvas.polyline(&[start, end], color, width, CONNECTOR_Z);
}

/// Three-segment right-angle connection: down from `start`, across at the
/// vertical midpoint, down into `end`.
pub fn elbow(canvas: &mut Canvas, start: Point, end: Point, color: &str, width: f32) {
    let mid_y = (start.y + end.y) / 2.0;
    canvas.polyline(
        &[start, pt(start.x, mid_y), pt(end.x, mid_y), end],
        color,
        width,
        CONNECTOR_Z,
    );
}

/// Straight arrow with an optional label floated just above its midpoint.
pub fn arrow(
    canvas: &mut Canvas,
    start: Point,
    end: Point,
    label: Option<&str>,
    style: &ArrowStyle,
) {
    let marker = canvas.arrow_marker(&style.color);
    let (x1, y1) = canvas.px(start);
    let (x2, y2) = canvas.px(end);
    canvas.push(
        ARROW_Z,
        format!(
            "<path d=\"M {x1:.2} {y1:.2} L {x2:.2} {y2:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" marker-end=\"url(#{marker})\"/>",
            style.color, style.width
        ),
    );
    if let Some(label) = label {
        let at = pt((start.x + end.x) / 2.0, (start.y + end.y) / 2.0 + 0.15);
        draw_label(canvas, at, label, style);
    }
}

/// Elbow arrow: horizontal run from `start` to `mid_x`, then an arrowed
/// vertical run into `end`.
pub fn elbow_arrow(
    canvas: &mut Canvas,
    start: Point,
    mid_x: f32,
    end: Point,
    label: Option<&str>,
    pos: LabelPos,
    style: &ArrowStyle,
) {
    canvas.polyline(
        &[start, pt(mid_x, start.y)],
        &style.color,
        style.width,
        ARROW_Z,
    );
    let marker = canvas.arrow_marker(&style.color);
    let (x1, y1) = canvas.px(pt(mid_x, start.y));
    let (x2, y2) = canvas.px(end);
    canvas.push(
        ARROW_Z,
        format!(
            "<path d=\"M {x1:.2} {y1:.2} L {x2:.2} {y2:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" marker-end=\"url(#{marker})\"/>",
            style.color, style.width
        ),
    );
    if let Some(label) = label {
        let at = match pos {
            LabelPos::Start => pt((start.x + mid_x) / 2.0, start.y + 0.2),
            LabelPos::Mid => pt(mid_x, (start.y + end.y) / 2.0),
        };
        draw_label(canvas, at, label, style);
    }
}

/// One-to-many tree connector: a stub down from the parent to a horizontal
/// bar 0.3 units below it, then a vertical stub to each child. Children keep
/// caller order; an empty child list draws nothing.
pub fn tree(
    canvas: &mut Canvas,
    parent_bottom: Point,
    children_tops: &[Point],
    color: &str,
    width: f32,
) {
    if children_tops.is_empty() {
        return;
    }
    let bar_y = parent_bottom.y - 0.3;
    let min_x = children_tops.iter().map(|c| c.x).fold(f32::INFINITY, f32::min);
    let max_x = children_tops
        .iter()
        .map(|c| c.x)
        .fold(f32::NEG_INFINITY, f32::max);

    let mut body = String::new();
    let segment = |canvas: &Canvas, a: Point, b: Point| {
        let (x1, y1) = canvas.px(a);
        let (x2, y2) = canvas.px(b);
        format!(
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{color}\" stroke-width=\"{width}\"/>"
        )
    };
    body.push_str(&segment(canvas, parent_bottom, pt(parent_bottom.x, bar_y)));
    body.push_str(&segment(canvas, pt(min_x, bar_y), pt(max_x, bar_y)));
    for child in children_tops {
        body.push_str(&segment(canvas, pt(child.x, bar_y), *child));
    }
    canvas.push(
        CONNECTOR_Z,
        format!("<g class=\"tree-connector\">{body}</g>"),
    );
}

fn draw_label(canvas: &mut Canvas, at: Point, label: &str, style: &ArrowStyle) {
    let text = TextStyle::new(LABEL_SIZE, &style.label_color).italic().z(6);
    let bbox = BoxedTextStyle {
        fill: "#FFFFFF".to_string(),
        stroke: None,
        stroke_width: 0.0,
        opacity: 0.9,
        pad_ratio: 0.2,
    };
    canvas.boxed_text(at, label, &text, &bbox, "edge-label");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_with_no_children_is_a_noop() {
        let mut canvas = Canvas::new(10.0, 10.0, "#FFFFFF");
        let before = canvas.element_count();
        tree(&mut canvas, pt(5.0, 5.0), &[], "#616161", 1.5);
        assert_eq!(canvas.element_count(), before);
    }

    #[test]
    fn tree_draws_parent_stub_bar_and_child_stubs() {
        let mut canvas = Canvas::new(10.0, 10.0, "#FFFFFF");
        tree(
            &mut canvas,
            pt(5.0, 6.0),
            &[pt(3.0, 4.0), pt(5.0, 4.0), pt(7.0, 4.0)],
            "#616161",
            2.0,
        );
        let svg = canvas.to_svg();
        assert_eq!(svg.matches("<g class=\"tree-connector\"").count(), 1);
        // parent stub + bar + 3 child stubs
        assert_eq!(svg.matches("<line").count(), 5);
    }

    #[test]
    fn elbow_arrow_places_start_label_over_horizontal_run() {
        let mut canvas = Canvas::new(10.0, 10.0, "#FFFFFF");
        let style = ArrowStyle {
            color: "#616161".to_string(),
            width: 1.8,
            label_color: "#2C3E50".to_string(),
        };
        elbow_arrow(
            &mut canvas,
            pt(6.0, 7.0),
            3.0,
            pt(3.0, 5.0),
            Some("Full Access"),
            LabelPos::Start,
            &style,
        );
        let svg = canvas.to_svg();
        assert!(svg.contains("Full Access"));
        assert!(svg.contains("marker-end"));
    }

    #[test]
    fn arrow_without_label_adds_no_label_box() {
        let mut canvas = Canvas::new(10.0, 10.0, "#FFFFFF");
        let style = ArrowStyle {
            color: "#616161".to_string(),
            width: 1.8,
            label_color: "#2C3E50".to_string(),
        };
        arrow(&mut canvas, pt(5.0, 8.0), pt(5.0, 6.0), None, &style);
        let svg = canvas.to_svg();
        assert!(!svg.contains("edge-label"));
    }
}
