use crate::text_metrics;
use std::collections::BTreeSet;

/// Horizontal resolution of the vector output. One figure unit corresponds to
/// one inch of the authored figure, emitted at 72 px.
pub const PX_PER_UNIT: f32 = 72.0;

const FONT_FAMILY: &str = "Georgia, 'Times New Roman', serif";
const LINE_HEIGHT: f32 = 1.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

pub fn pt(x: f32, y: f32) -> Point {
    Point { x, y }
}

/// Named positions on a drawn shape, in figure units. Connector calls consume
/// these instead of re-deriving node geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub center: Point,
    pub top: Point,
    pub bottom: Point,
    pub left: Point,
    pub right: Point,
}

impl Anchors {
    pub fn from_extents(center: Point, half_width: f32, half_height: f32) -> Self {
        Self {
            center,
            top: pt(center.x, center.y + half_height),
            bottom: pt(center.x, center.y - half_height),
            left: pt(center.x - half_width, center.y),
            right: pt(center.x + half_width, center.y),
        }
    }
}

/// Hatch fills used so the category regions stay distinguishable in
/// grayscale print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hatch {
    Diagonal,
    Dots,
    Cross,
}

impl Hatch {
    fn token(self) -> &'static str {
        match self {
            Hatch::Diagonal => "diag",
            Hatch::Dots => "dots",
            Hatch::Cross => "cross",
        }
    }

    fn pattern_body(self, color: &str) -> String {
        match self {
            Hatch::Diagonal => format!(
                "<path d=\"M 0 6 L 6 0\" stroke=\"{color}\" stroke-width=\"0.8\"/>"
            ),
            Hatch::Dots => format!("<circle cx=\"3\" cy=\"3\" r=\"0.8\" fill=\"{color}\"/>"),
            Hatch::Cross => format!(
                "<path d=\"M 0 6 L 6 0 M 0 0 L 6 6\" stroke=\"{color}\" stroke-width=\"0.8\"/>"
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSlant {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextStyle {
    pub size: f32,
    pub color: String,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub anchor: TextAnchor,
    pub rotate: Option<f32>,
    pub z: i32,
}

impl TextStyle {
    pub fn new(size: f32, color: &str) -> Self {
        Self {
            size,
            color: color.to_string(),
            weight: FontWeight::Normal,
            slant: FontSlant::Normal,
            anchor: TextAnchor::Middle,
            rotate: None,
            z: 11,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.slant = FontSlant::Italic;
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn rotate(mut self, degrees: f32) -> Self {
        self.rotate = Some(degrees);
        self
    }

    pub fn z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }
}

/// Style for a boxed node (rounded rectangle, capsule, diamond). Sizes are in
/// figure units, stroke widths in px. `pad` enlarges the drawn shape beyond
/// the nominal extent the anchors are computed from, matching the authored
/// geometry where box padding never moves connector attachment points.
#[derive(Debug, Clone)]
pub struct NodeStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f32,
    pub corner_radius: f32,
    pub pad: f32,
    pub text: TextStyle,
    pub class: &'static str,
    pub z: i32,
}

/// White backing box behind a piece of floating text (method labels,
/// connector labels).
#[derive(Debug, Clone)]
pub struct BoxedTextStyle {
    pub fill: String,
    pub stroke: Option<String>,
    pub stroke_width: f32,
    pub opacity: f32,
    pub pad_ratio: f32,
}

#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub fill: String,
    pub border: String,
    pub hatch: Option<Hatch>,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    UpperRight,
    LowerRight,
}

struct Element {
    z: i32,
    svg: String,
}

/// Bounded drawing surface for one figure. Coordinates are figure units with
/// the origin at the lower left (y grows upward, as authored); conversion to
/// y-down SVG pixels happens at emission time. Elements carry a z-order and
/// are written out in stable-sorted z order.
pub struct Canvas {
    width: f32,
    height: f32,
    background: String,
    defs: Vec<String>,
    def_ids: BTreeSet<String>,
    elements: Vec<Element>,
}

impl Canvas {
    pub fn new(width: f32, height: f32, background: &str) -> Self {
        Self {
            width,
            height,
            background: background.to_string(),
            defs: Vec::new(),
            def_ids: BTreeSet::new(),
            elements: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Figure units to SVG pixels, flipping the y axis.
    pub fn px(&self, p: Point) -> (f32, f32) {
        (p.x * PX_PER_UNIT, (self.height - p.y) * PX_PER_UNIT)
    }

    pub fn push(&mut self, z: i32, svg: String) {
        self.elements.push(Element { z, svg });
    }

    fn ensure_def(&mut self, id: &str, body: String) {
        if self.def_ids.insert(id.to_string()) {
            self.defs.push(body);
        }
    }

    /// Registers a hatch pattern def for `color` and returns its paint server
    /// reference.
    pub fn hatch_fill(&mut self, hatch: Hatch, color: &str) -> String {
        let id = format!("hatch-{}-{}", hatch.token(), color_token(color));
        let body = format!(
            "<pattern id=\"{id}\" width=\"6\" height=\"6\" patternUnits=\"userSpaceOnUse\">{}</pattern>",
            hatch.pattern_body(color)
        );
        self.ensure_def(&id, body);
        format!("url(#{id})")
    }

    /// Registers an arrowhead marker for `color` and returns its id.
    pub fn arrow_marker(&mut self, color: &str) -> String {
        let id = format!("arrow-{}", color_token(color));
        let body = format!(
            "<marker id=\"{id}\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" markerWidth=\"6\" markerHeight=\"6\" orient=\"auto-start-reverse\"><path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"{color}\"/></marker>"
        );
        self.ensure_def(&id, body);
        id
    }

    // --- low-level primitives -------------------------------------------

    pub fn polyline(&mut self, points: &[Point], color: &str, width: f32, z: i32) {
        self.styled_polyline(points, color, width, None, 1.0, z);
    }

    pub fn styled_polyline(
        &mut self,
        points: &[Point],
        color: &str,
        width: f32,
        dash: Option<&str>,
        opacity: f32,
        z: i32,
    ) {
        if points.len() < 2 {
            return;
        }
        let d = self.path_data(points);
        let dash = dash
            .map(|pattern| format!(" stroke-dasharray=\"{pattern}\""))
            .unwrap_or_default();
        self.push(
            z,
            format!(
                "<path d=\"{d}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{width}\" stroke-opacity=\"{opacity}\"{dash}/>"
            ),
        );
    }

    pub fn polygon(&mut self, points: &[Point], fill: &str, opacity: f32, z: i32) {
        if points.len() < 3 {
            return;
        }
        let mut d = self.path_data(points);
        d.push_str(" Z");
        self.push(
            z,
            format!("<path d=\"{d}\" fill=\"{fill}\" fill-opacity=\"{opacity}\" stroke=\"none\"/>"),
        );
    }

    /// Circle with a radius in px (point sizes from the authored figure carry
    /// over directly at 72 px/unit).
    pub fn circle(
        &mut self,
        center: Point,
        radius_px: f32,
        fill: &str,
        stroke: &str,
        stroke_width: f32,
        opacity: f32,
        z: i32,
    ) {
        let (cx, cy) = self.px(center);
        self.push(
            z,
            format!(
                "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{radius_px:.2}\" fill=\"{fill}\" fill-opacity=\"{opacity}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\"/>"
            ),
        );
    }

    /// Translucent hatched rectangle anchored at its lower-left corner. Used
    /// for the category background regions.
    pub fn region(
        &mut self,
        origin: Point,
        width: f32,
        height: f32,
        color: &str,
        opacity: f32,
        hatch: Hatch,
        z: i32,
    ) {
        let hatch_fill = self.hatch_fill(hatch, color);
        let (x, y) = self.px(pt(origin.x, origin.y + height));
        let w = width * PX_PER_UNIT;
        let h = height * PX_PER_UNIT;
        self.push(
            z,
            format!(
                "<g class=\"region\"><rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" fill=\"{color}\" fill-opacity=\"{opacity}\"/><rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" fill=\"{hatch_fill}\" fill-opacity=\"{opacity}\"/></g>"
            ),
        );
    }

    /// Plain rounded rectangle anchored at its lower-left corner, no text.
    pub fn panel(
        &mut self,
        origin: Point,
        width: f32,
        height: f32,
        corner_radius: f32,
        fill: &str,
        fill_opacity: f32,
        stroke: &str,
        stroke_width: f32,
        z: i32,
    ) {
        let (x, y) = self.px(pt(origin.x, origin.y + height));
        let w = width * PX_PER_UNIT;
        let h = height * PX_PER_UNIT;
        let rx = corner_radius * PX_PER_UNIT;
        self.push(
            z,
            format!(
                "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" rx=\"{rx:.2}\" ry=\"{rx:.2}\" fill=\"{fill}\" fill-opacity=\"{fill_opacity}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\"/>"
            ),
        );
    }

    pub fn text(&mut self, at: Point, content: &str, style: &TextStyle) {
        let svg = self.text_element(at, content, style);
        self.push(style.z, svg);
    }

    // --- shape helpers ---------------------------------------------------

    /// Rounded box with centered text. `width`/`height` are the nominal
    /// extents the anchors are computed from; the drawn rect is enlarged by
    /// `style.pad` on every side.
    pub fn node_box(
        &mut self,
        center: Point,
        width: f32,
        height: f32,
        text: &str,
        style: &NodeStyle,
    ) -> Anchors {
        let half_w = width / 2.0 + style.pad;
        let half_h = height / 2.0 + style.pad;
        let (x, y) = self.px(pt(center.x - half_w, center.y + half_h));
        let w = half_w * 2.0 * PX_PER_UNIT;
        let h = half_h * 2.0 * PX_PER_UNIT;
        let rx = style.corner_radius * PX_PER_UNIT;
        let rect = format!(
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" rx=\"{rx:.2}\" ry=\"{rx:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            style.fill, style.stroke, style.stroke_width
        );
        let label = self.text_element(center, text, &style.text);
        self.push(
            style.z,
            format!("<g class=\"{}\">{rect}{label}</g>", style.class),
        );
        Anchors::from_extents(center, width / 2.0, height / 2.0)
    }

    /// Diamond decision node. `half_size` is the distance from the center to
    /// each vertex; anchors sit on the four vertices.
    pub fn diamond(
        &mut self,
        center: Point,
        half_size: f32,
        text: &str,
        style: &NodeStyle,
    ) -> Anchors {
        let anchors = Anchors::from_extents(center, half_size, half_size);
        let vertices = [anchors.top, anchors.right, anchors.bottom, anchors.left];
        let mut d = self.path_data(&vertices);
        d.push_str(" Z");
        let shape = format!(
            "<path d=\"{d}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            style.fill, style.stroke, style.stroke_width
        );
        let label = self.text_element(center, text, &style.text);
        self.push(
            style.z,
            format!("<g class=\"{}\">{shape}{label}</g>", style.class),
        );
        anchors
    }

    /// Start/end capsule: a rounded box whose corner radius is half its
    /// height.
    pub fn capsule(
        &mut self,
        center: Point,
        width: f32,
        height: f32,
        text: &str,
        style: &NodeStyle,
    ) -> Anchors {
        let style = NodeStyle {
            corner_radius: (height / 2.0 + style.pad).min(height),
            ..style.clone()
        };
        self.node_box(center, width, height, text, &style)
    }

    /// Method leaf: text with a subtle white backing box. The nominal half
    /// height is fixed at 0.2 units so connector stubs attach at the same
    /// offset regardless of line count.
    pub fn method_label(&mut self, center: Point, text: &str, text_color: &str) -> Anchors {
        let style = TextStyle::new(9.0, text_color).z(4);
        let bbox = BoxedTextStyle {
            fill: "#FFFFFF".to_string(),
            stroke: Some("#E0E0E0".to_string()),
            stroke_width: 0.8,
            opacity: 0.95,
            pad_ratio: 0.25,
        };
        let half_w = self.boxed_text(center, text, &style, &bbox, "method") / 2.0 / PX_PER_UNIT;
        Anchors::from_extents(center, half_w, 0.2)
    }

    /// Text over a rounded backing rect sized from measured text. Returns the
    /// backing box width in px.
    pub fn boxed_text(
        &mut self,
        at: Point,
        text: &str,
        style: &TextStyle,
        bbox: &BoxedTextStyle,
        class: &str,
    ) -> f32 {
        let lines = line_count(text);
        let pad = bbox.pad_ratio * style.size;
        let text_w = text_metrics::text_width(text, style.size);
        let w = text_w + 2.0 * pad;
        let h = lines as f32 * style.size * LINE_HEIGHT + 2.0 * pad;
        let (cx, cy) = self.px(at);
        let stroke = match &bbox.stroke {
            Some(color) => format!(
                " stroke=\"{color}\" stroke-width=\"{}\"",
                bbox.stroke_width
            ),
            None => String::new(),
        };
        let rect = format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" rx=\"3\" ry=\"3\" fill=\"{}\" fill-opacity=\"{}\"{stroke}/>",
            cx - w / 2.0,
            cy - h / 2.0,
            bbox.fill,
            bbox.opacity
        );
        let label = self.text_element(at, text, style);
        self.push(style.z, format!("<g class=\"{class}\">{rect}{label}</g>"));
        w
    }

    /// Legend panel in a fixed corner. Swatch colors are the caller's
    /// responsibility: every entry should reference a color the figure
    /// actually uses.
    pub fn legend(
        &mut self,
        entries: &[LegendEntry],
        corner: Corner,
        font_size: f32,
        frame_color: &str,
        text_color: &str,
    ) {
        if entries.is_empty() {
            return;
        }
        const SWATCH_W: f32 = 0.30;
        const SWATCH_H: f32 = 0.20;
        const GAP: f32 = 0.10;
        const ROW_H: f32 = 0.32;
        const PAD: f32 = 0.15;
        const MARGIN: f32 = 0.35;

        let max_text = entries
            .iter()
            .map(|entry| text_metrics::text_width(&entry.label, font_size))
            .fold(0.0f32, f32::max)
            / PX_PER_UNIT;
        let box_w = PAD + SWATCH_W + GAP + max_text + PAD;
        let box_h = 2.0 * PAD + entries.len() as f32 * ROW_H;
        let x0 = self.width - MARGIN - box_w;
        let y0 = match corner {
            Corner::UpperRight => self.height - MARGIN - box_h,
            Corner::LowerRight => MARGIN,
        };

        let mut body = String::new();
        let (fx, fy) = self.px(pt(x0, y0 + box_h));
        body.push_str(&format!(
            "<rect x=\"{fx:.2}\" y=\"{fy:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"4\" ry=\"4\" fill=\"#FFFFFF\" fill-opacity=\"0.95\" stroke=\"{frame_color}\" stroke-width=\"1\"/>",
            box_w * PX_PER_UNIT,
            box_h * PX_PER_UNIT
        ));

        for (idx, entry) in entries.iter().enumerate() {
            let row_top = y0 + box_h - PAD - idx as f32 * ROW_H - (ROW_H - SWATCH_H) / 2.0;
            let (sx, sy) = self.px(pt(x0 + PAD, row_top));
            let sw = SWATCH_W * PX_PER_UNIT;
            let sh = SWATCH_H * PX_PER_UNIT;
            body.push_str(&format!(
                "<rect x=\"{sx:.2}\" y=\"{sy:.2}\" width=\"{sw:.2}\" height=\"{sh:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
                entry.fill, entry.border
            ));
            if let Some(hatch) = entry.hatch {
                let hatch_fill = self.hatch_fill(hatch, &entry.border);
                body.push_str(&format!(
                    "<rect x=\"{sx:.2}\" y=\"{sy:.2}\" width=\"{sw:.2}\" height=\"{sh:.2}\" fill=\"{hatch_fill}\"/>"
                ));
            }
            let label_at = pt(x0 + PAD + SWATCH_W + GAP, row_top - SWATCH_H / 2.0);
            let label_style = TextStyle::new(font_size, text_color).anchor(TextAnchor::Start);
            body.push_str(&self.text_element(label_at, &entry.label, &label_style));
        }

        self.push(20, format!("<g class=\"legend\">{body}</g>"));
    }

    // --- emission --------------------------------------------------------

    pub fn to_svg(&self) -> String {
        let width = self.width * PX_PER_UNIT;
        let height = self.height * PX_PER_UNIT;
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        svg.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            self.background
        ));
        if !self.defs.is_empty() {
            svg.push_str("<defs>");
            for def in &self.defs {
                svg.push_str(def);
            }
            svg.push_str("</defs>");
        }
        let mut order: Vec<&Element> = self.elements.iter().collect();
        order.sort_by_key(|element| element.z);
        for element in order {
            svg.push_str(&element.svg);
        }
        svg.push_str("</svg>");
        svg
    }

    fn path_data(&self, points: &[Point]) -> String {
        let mut d = String::new();
        for (idx, point) in points.iter().enumerate() {
            let (x, y) = self.px(*point);
            if idx == 0 {
                d.push_str(&format!("M {x:.2} {y:.2}"));
            } else {
                d.push_str(&format!(" L {x:.2} {y:.2}"));
            }
        }
        d
    }

    /// Multi-line text centered vertically on `at`, one tspan per line.
    fn text_element(&self, at: Point, content: &str, style: &TextStyle) -> String {
        let (x, y) = self.px(at);
        let lines: Vec<&str> = content.split('\n').collect();
        let total = lines.len() as f32 * style.size * LINE_HEIGHT;
        let first_baseline = y - total / 2.0 + style.size;
        let weight = match style.weight {
            FontWeight::Normal => "",
            FontWeight::Bold => " font-weight=\"bold\"",
        };
        let slant = match style.slant {
            FontSlant::Normal => "",
            FontSlant::Italic => " font-style=\"italic\"",
        };
        let transform = style
            .rotate
            .map(|deg| format!(" transform=\"rotate({deg} {x:.2} {y:.2})\""))
            .unwrap_or_default();

        let mut text = format!(
            "<text x=\"{x:.2}\" y=\"{first_baseline:.2}\" text-anchor=\"{}\" font-family=\"{FONT_FAMILY}\" font-size=\"{}\" fill=\"{}\"{weight}{slant}{transform}>",
            style.anchor.svg(),
            style.size,
            style.color
        );
        for (idx, line) in lines.iter().enumerate() {
            let dy = if idx == 0 {
                "0".to_string()
            } else {
                format!("{:.2}", style.size * LINE_HEIGHT)
            };
            text.push_str(&format!(
                "<tspan x=\"{x:.2}\" dy=\"{dy}\">{}</tspan>",
                escape_xml(line)
            ));
        }
        text.push_str("</text>");
        text
    }
}

fn line_count(text: &str) -> usize {
    text.split('\n').count().max(1)
}

fn color_token(color: &str) -> String {
    color
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_style() -> NodeStyle {
        NodeStyle {
            fill: "#ECECFF".to_string(),
            stroke: "#9370DB".to_string(),
            stroke_width: 1.5,
            corner_radius: 0.1,
            pad: 0.05,
            text: TextStyle::new(9.0, "#333333"),
            class: "node",
            z: 10,
        }
    }

    #[test]
    fn node_box_anchors_use_nominal_extent() {
        let mut canvas = Canvas::new(10.0, 10.0, "#FFFFFF");
        let anchors = canvas.node_box(pt(5.0, 5.0), 2.0, 1.0, "A", &node_style());
        assert_eq!(anchors.top, pt(5.0, 5.5));
        assert_eq!(anchors.bottom, pt(5.0, 4.5));
        assert_eq!(anchors.left, pt(4.0, 5.0));
        assert_eq!(anchors.right, pt(6.0, 5.0));
        assert_eq!(anchors.center, pt(5.0, 5.0));
    }

    #[test]
    fn method_label_with_empty_text_is_well_formed() {
        let mut canvas = Canvas::new(10.0, 10.0, "#FFFFFF");
        let anchors = canvas.method_label(pt(3.0, 3.0), "", "#212121");
        assert_eq!(anchors.top, pt(3.0, 3.2));
        assert_eq!(anchors.bottom, pt(3.0, 2.8));
        assert_eq!(anchors.center, pt(3.0, 3.0));
        assert!(anchors.left.x <= anchors.center.x);
        assert!(anchors.right.x >= anchors.center.x);
    }

    #[test]
    fn node_helpers_with_empty_text_keep_their_anchors() {
        let mut canvas = Canvas::new(10.0, 10.0, "#FFFFFF");
        let style = node_style();

        let boxed = canvas.node_box(pt(5.0, 5.0), 2.0, 1.0, "", &style);
        assert_eq!(boxed, Anchors::from_extents(pt(5.0, 5.0), 1.0, 0.5));

        let diamond = canvas.diamond(pt(2.0, 7.0), 0.7, "", &style);
        assert_eq!(diamond, Anchors::from_extents(pt(2.0, 7.0), 0.7, 0.7));

        let capsule = canvas.capsule(pt(7.0, 2.0), 3.0, 0.8, "", &style);
        assert_eq!(capsule, Anchors::from_extents(pt(7.0, 2.0), 1.5, 0.4));
    }

    #[test]
    fn diamond_anchors_sit_on_vertices() {
        let mut canvas = Canvas::new(10.0, 10.0, "#FFFFFF");
        let anchors = canvas.diamond(pt(5.0, 5.0), 0.7, "?", &node_style());
        assert_eq!(anchors.top, pt(5.0, 5.7));
        assert_eq!(anchors.left, pt(4.3, 5.0));
    }

    #[test]
    fn y_axis_flips_at_emission() {
        let canvas = Canvas::new(10.0, 8.0, "#FFFFFF");
        let (x, y) = canvas.px(pt(1.0, 1.0));
        assert_eq!(x, PX_PER_UNIT);
        assert_eq!(y, 7.0 * PX_PER_UNIT);
    }

    #[test]
    fn defs_are_registered_once() {
        let mut canvas = Canvas::new(10.0, 10.0, "#FFFFFF");
        let a = canvas.hatch_fill(Hatch::Diagonal, "#1565C0");
        let b = canvas.hatch_fill(Hatch::Diagonal, "#1565C0");
        assert_eq!(a, b);
        let svg = canvas.to_svg();
        assert_eq!(svg.matches("<pattern").count(), 1);
    }

    #[test]
    fn elements_emit_in_z_order() {
        let mut canvas = Canvas::new(10.0, 10.0, "#FFFFFF");
        canvas.push(5, "<g id=\"late\"/>".to_string());
        canvas.push(-1, "<g id=\"early\"/>".to_string());
        let svg = canvas.to_svg();
        let early = svg.find("early").unwrap();
        let late = svg.find("late").unwrap();
        assert!(early < late);
    }

    #[test]
    fn escapes_label_text() {
        let mut canvas = Canvas::new(10.0, 10.0, "#FFFFFF");
        canvas.text(pt(5.0, 5.0), "a<b & c", &TextStyle::new(9.0, "#000000"));
        let svg = canvas.to_svg();
        assert!(svg.contains("a&lt;b &amp; c"));
    }
}
