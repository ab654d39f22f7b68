use survey_figures::config::RenderConfig;
use survey_figures::figures;
use survey_figures::palette::Palette;

const FIGURE_NAMES: [&str; 4] = [
    "taxonomy_diagram",
    "decision_tree",
    "explainability_approaches",
    "accuracy_interpretability",
];

#[test]
fn export_writes_both_files_per_figure() {
    let dir = tempfile::tempdir().unwrap();
    let palette = Palette::survey_default();
    // keep the raster leg fast in tests
    let render = RenderConfig { raster_dpi: 72.0 };

    for figure in figures::all(&palette) {
        figure.export(dir.path(), &render).unwrap();
    }

    for name in FIGURE_NAMES {
        for ext in ["pdf", "png"] {
            let path = dir.path().join(format!("{name}.{ext}"));
            let meta = std::fs::metadata(&path)
                .unwrap_or_else(|_| panic!("missing output {}", path.display()));
            assert!(meta.len() > 0, "empty output {}", path.display());
        }
    }
}

#[test]
fn repeated_runs_produce_identical_geometry() {
    let palette = Palette::survey_default();
    let first: Vec<String> = figures::all(&palette).iter().map(|f| f.svg()).collect();
    let second: Vec<String> = figures::all(&palette).iter().map(|f| f.svg()).collect();
    assert_eq!(first, second);
}

#[test]
fn taxonomy_structure_matches_the_authored_figure() {
    let palette = Palette::survey_default();
    let svg = figures::taxonomy::build(&palette).svg();

    assert_eq!(svg.matches("class=\"root\"").count(), 1);
    assert_eq!(svg.matches("class=\"category\"").count(), 3);
    assert_eq!(svg.matches("class=\"method\"").count(), 22);
    assert_eq!(svg.matches("class=\"tree-connector\"").count(), 4);

    // child stubs: 3 categories + 12 local + 4 global + 6 LLM-era, plus a
    // parent stub and bar per group: 25 + 4 * 2 = 33 segments in total
    assert_eq!(svg.matches("<line").count(), 33);
}

#[test]
fn every_legend_swatch_color_is_used_by_its_figure() {
    let palette = Palette::survey_default();
    for figure in figures::all(&palette) {
        let svg = figure.svg();
        let Some(legend_at) = svg.find("<g class=\"legend\"") else {
            // the scatter plot has no legend
            assert_eq!(figure.name, "accuracy_interpretability");
            continue;
        };
        let legend = &svg[legend_at..];
        let body = &svg[..legend_at];
        for color in swatch_fills(legend) {
            assert!(
                body.contains(&color),
                "{}: legend color {color} not used by figure",
                figure.name
            );
        }
    }
}

#[test]
fn figure_canvases_have_authored_bounds() {
    let palette = Palette::survey_default();
    let sizes: Vec<(f32, f32)> = figures::all(&palette)
        .iter()
        .map(|f| (f.canvas.width(), f.canvas.height()))
        .collect();
    assert_eq!(
        sizes,
        [(16.0, 8.0), (15.0, 10.0), (14.0, 8.0), (11.0, 8.0)]
    );
}

/// Pulls the plain-color `fill` attributes of legend swatch rects.
fn swatch_fills(legend: &str) -> Vec<String> {
    let mut fills = Vec::new();
    for chunk in legend.split("fill=\"").skip(1) {
        let Some(end) = chunk.find('"') else { continue };
        let value = &chunk[..end];
        if value.starts_with('#') && value != "#FFFFFF" {
            fills.push(value.to_string());
        }
    }
    fills
}
