use crate::palette::Palette;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Raster resolution of the PNG outputs, in dots per figure inch.
    pub raster_dpi: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { raster_dpi: 300.0 }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub palette: Palette,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: Palette::survey_default(),
            render: RenderConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct PaletteOverrides {
    root: Option<String>,
    local: Option<String>,
    local_bg: Option<String>,
    local_border: Option<String>,
    global: Option<String>,
    global_bg: Option<String>,
    global_border: Option<String>,
    llm: Option<String>,
    llm_bg: Option<String>,
    llm_border: Option<String>,
    method: Option<String>,
    text_primary: Option<String>,
    connector: Option<String>,
    arrow: Option<String>,
    decision: Option<String>,
    recommend: Option<String>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    palette: Option<PaletteOverrides>,
    raster_dpi: Option<f32>,
}

/// Defaults, optionally overridden by a JSON file. Overrides touch colors and
/// raster resolution only; figure geometry and text are fixed.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(dpi) = parsed.raster_dpi {
        config.render.raster_dpi = dpi;
    }
    if let Some(overrides) = parsed.palette {
        merge_palette(&mut config.palette, overrides);
    }
    Ok(config)
}

fn merge_palette(palette: &mut Palette, overrides: PaletteOverrides) {
    macro_rules! apply {
        ($($field:ident),* $(,)?) => {
            $(if let Some(value) = overrides.$field {
                palette.$field = value;
            })*
        };
    }
    apply!(
        root,
        local,
        local_bg,
        local_border,
        global,
        global_bg,
        global_border,
        llm,
        llm_bg,
        llm_border,
        method,
        text_primary,
        connector,
        arrow,
        decision,
        recommend,
        background,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.render.raster_dpi, 300.0);
        assert_eq!(config.palette.root, "#263238");
    }

    #[test]
    fn overrides_merge_over_defaults() {
        let mut palette = Palette::survey_default();
        merge_palette(
            &mut palette,
            PaletteOverrides {
                root: Some("#000000".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(palette.root, "#000000");
        assert_eq!(palette.local, "#1565C0");
    }
}
