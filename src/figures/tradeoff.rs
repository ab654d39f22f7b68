//! Figure 4: accuracy vs interpretability trade-off scatter plot. Unlike the
//! tree figures this one carries its own axis frame: grid, ticks, spines and
//! axis labels are drawn from the same fixed coordinates as the data points.

use super::Figure;
use crate::canvas::{Canvas, Point, TextAnchor, TextStyle, pt};
use crate::palette::Palette;

const AXIS_COLOR: &str = "#2C3E50";
const GRID_COLOR: &str = "#BDC3C7";
const TREND_COLOR: &str = "#3498DB";
const LEADER_COLOR: &str = "#7F8C8D";
const DATA_MAX: f32 = 10.5;

/// Model points: (accuracy, interpretability, name, color, label dx, label
/// dy, label anchor). Offsets were tuned by hand to keep labels clear of the
/// trend band.
const MODELS: [(f32, f32, &str, &str, f32, f32, TextAnchor); 6] = [
    (3.5, 9.5, "Linear Regression", "#27AE60", 0.4, 0.0, TextAnchor::Start),
    (4.5, 8.5, "Decision Trees", "#2ECC71", 0.4, -0.1, TextAnchor::Start),
    (6.0, 6.0, "K-Nearest Neighbors", "#F39C12", 0.4, 0.0, TextAnchor::Start),
    (7.0, 4.5, "Random Forests", "#E67E22", 0.4, 0.0, TextAnchor::Start),
    (7.8, 3.0, "Support Vector Machines", "#E74C3C", -0.4, 0.0, TextAnchor::End),
    (9.0, 1.5, "Deep Neural Networks", "#9B59B6", 0.4, -0.1, TextAnchor::Start),
];

/// Maps plot data coordinates (0..10.5 on both axes) into the figure-unit
/// rectangle left free by the margins.
struct AxisFrame {
    x0: f32,
    y0: f32,
    width: f32,
    height: f32,
}

impl AxisFrame {
    fn map(&self, dx: f32, dy: f32) -> Point {
        pt(
            self.x0 + dx / DATA_MAX * self.width,
            self.y0 + dy / DATA_MAX * self.height,
        )
    }
}

pub fn build(palette: &Palette) -> Figure {
    let mut canvas = Canvas::new(11.0, 8.0, &palette.background);
    let frame = AxisFrame {
        x0: 1.1,
        y0: 0.85,
        width: 9.55,
        height: 6.4,
    };

    draw_grid(&mut canvas, &frame);
    draw_zones(&mut canvas, &frame);
    draw_trend(&mut canvas, &frame);
    draw_axes(&mut canvas, &frame);
    draw_models(&mut canvas, &frame);

    canvas.text(
        frame.map(1.8, 9.9),
        "High Interpretability\nLower Accuracy",
        &TextStyle::new(10.0, "#27AE60").bold().italic().z(16),
    );
    canvas.text(
        frame.map(8.7, 0.9),
        "High Accuracy\nLower Interpretability",
        &TextStyle::new(10.0, "#9B59B6").bold().italic().z(16),
    );

    Figure {
        name: "accuracy_interpretability",
        canvas,
    }
}

fn draw_grid(canvas: &mut Canvas, frame: &AxisFrame) {
    for v in [2.0, 4.0, 6.0, 8.0, 10.0] {
        canvas.styled_polyline(
            &[frame.map(v, 0.0), frame.map(v, DATA_MAX)],
            GRID_COLOR,
            1.0,
            Some("5 4"),
            0.4,
            0,
        );
        canvas.styled_polyline(
            &[frame.map(0.0, v), frame.map(DATA_MAX, v)],
            GRID_COLOR,
            1.0,
            Some("5 4"),
            0.4,
            0,
        );
    }
}

fn draw_zones(canvas: &mut Canvas, frame: &AxisFrame) {
    // Top-left: high interpretability, lower accuracy.
    canvas.polygon(
        &[
            frame.map(0.0, 6.0),
            frame.map(0.0, DATA_MAX),
            frame.map(4.5, DATA_MAX),
        ],
        "#27AE60",
        0.08,
        0,
    );
    // Bottom-right: high accuracy, lower interpretability.
    canvas.polygon(
        &[
            frame.map(6.0, 0.0),
            frame.map(DATA_MAX, 0.0),
            frame.map(DATA_MAX, 4.5),
        ],
        "#9B59B6",
        0.08,
        0,
    );
}

/// Dashed inverse trend line y = 11 - 1.1x clamped to [0.5, 10], with a
/// translucent +-1.3 band around it.
fn draw_trend(canvas: &mut Canvas, frame: &AxisFrame) {
    let mut curve = Vec::new();
    let mut x = 2.0f32;
    while x <= 10.0 + 1e-3 {
        let y = (11.0 - 1.1 * x).clamp(0.5, 10.0);
        curve.push((x, y));
        x += 0.25;
    }

    let mut band: Vec<Point> = curve
        .iter()
        .map(|&(x, y)| frame.map(x, y + 1.3))
        .collect();
    band.extend(curve.iter().rev().map(|&(x, y)| frame.map(x, y - 1.3)));
    canvas.polygon(&band, TREND_COLOR, 0.12, 1);

    let line: Vec<Point> = curve.iter().map(|&(x, y)| frame.map(x, y)).collect();
    canvas.styled_polyline(&line, TREND_COLOR, 2.0, Some("8 5"), 0.6, 2);
}

fn draw_axes(canvas: &mut Canvas, frame: &AxisFrame) {
    let bl = frame.map(0.0, 0.0);
    let br = frame.map(DATA_MAX, 0.0);
    let tr = frame.map(DATA_MAX, DATA_MAX);
    let tl = frame.map(0.0, DATA_MAX);
    canvas.polyline(&[bl, br, tr, tl, bl], AXIS_COLOR, 1.5, 3);

    let tick_style = TextStyle::new(10.0, AXIS_COLOR).z(3);
    for v in [0.0, 2.0, 4.0, 6.0, 8.0, 10.0] {
        let xt = frame.map(v, 0.0);
        canvas.polyline(&[xt, pt(xt.x, xt.y - 0.08)], AXIS_COLOR, 1.5, 3);
        canvas.text(pt(xt.x, xt.y - 0.25), &format!("{}", v as i32), &tick_style);

        let yt = frame.map(0.0, v);
        canvas.polyline(&[yt, pt(yt.x - 0.08, yt.y)], AXIS_COLOR, 1.5, 3);
        canvas.text(
            pt(yt.x - 0.15, yt.y),
            &format!("{}", v as i32),
            &tick_style.clone().anchor(TextAnchor::End),
        );
    }

    let mid_x = frame.x0 + frame.width / 2.0;
    let mid_y = frame.y0 + frame.height / 2.0;
    canvas.text(
        pt(mid_x, 0.28),
        "Accuracy (Model Performance)",
        &TextStyle::new(12.0, AXIS_COLOR).bold().z(3),
    );
    canvas.text(
        pt(0.3, mid_y),
        "Interpretability (Human Understanding)",
        &TextStyle::new(12.0, AXIS_COLOR).bold().rotate(-90.0).z(3),
    );
    canvas.text(
        pt(mid_x, 7.65),
        "Accuracy-Interpretability Trade-off in Machine Learning",
        &TextStyle::new(14.0, AXIS_COLOR).bold().z(3),
    );
}

fn draw_models(canvas: &mut Canvas, frame: &AxisFrame) {
    let radius = (280.0f32 / std::f32::consts::PI).sqrt();
    for (accuracy, interpretability, name, color, dx, dy, anchor) in MODELS {
        let point = frame.map(accuracy, interpretability);
        canvas.circle(point, radius, color, AXIS_COLOR, 2.0, 0.9, 10);

        // Short leader from the marker edge toward the label.
        let sign = dx.signum();
        canvas.polyline(
            &[
                frame.map(accuracy + sign * 0.18, interpretability),
                frame.map(accuracy + dx - sign * 0.06, interpretability + dy),
            ],
            LEADER_COLOR,
            0.8,
            9,
        );
        canvas.text(
            frame.map(accuracy + dx, interpretability + dy),
            name,
            &TextStyle::new(10.0, AXIS_COLOR).bold().anchor(anchor).z(11),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plots_all_six_models() {
        let palette = Palette::survey_default();
        let svg = build(&palette).svg();
        assert_eq!(svg.matches("<circle").count(), 6);
        for (_, _, name, ..) in MODELS {
            assert!(svg.contains(name), "missing model label {name}");
        }
    }

    #[test]
    fn axis_frame_maps_corners() {
        let frame = AxisFrame {
            x0: 1.1,
            y0: 0.85,
            width: 9.55,
            height: 6.4,
        };
        assert_eq!(frame.map(0.0, 0.0), pt(1.1, 0.85));
        let top_right = frame.map(DATA_MAX, DATA_MAX);
        assert!((top_right.x - 10.65).abs() < 1e-4);
        assert!((top_right.y - 7.25).abs() < 1e-4);
    }

    #[test]
    fn trend_curve_stays_clamped() {
        // authored clamp keeps the dashed line inside the axes
        for x in [2.0f32, 6.0, 9.8, 10.0] {
            let y = (11.0 - 1.1 * x).clamp(0.5, 10.0);
            assert!((0.5..=10.0).contains(&y));
        }
    }

    #[test]
    fn zone_labels_present() {
        let palette = Palette::survey_default();
        let svg = build(&palette).svg();
        assert!(svg.contains("High Interpretability"));
        assert!(svg.contains("Lower Interpretability"));
    }
}
