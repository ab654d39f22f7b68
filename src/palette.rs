use serde::{Deserialize, Serialize};

/// Semantic color names shared by all four figures.
///
/// The node/connector colors were picked for WCAG AA contrast against their
/// backgrounds; the `_bg`/`_border` pairs belong to the matching category
/// color and must be changed together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    pub root: String,
    pub local: String,
    pub local_bg: String,
    pub local_border: String,
    pub global: String,
    pub global_bg: String,
    pub global_border: String,
    pub llm: String,
    pub llm_bg: String,
    pub llm_border: String,
    pub method: String,
    pub text_primary: String,
    pub connector: String,
    pub arrow: String,
    pub decision: String,
    pub recommend: String,
    pub background: String,
}

impl Palette {
    pub fn survey_default() -> Self {
        Self {
            root: "#263238".to_string(),
            local: "#1565C0".to_string(),
            local_bg: "#E3F2FD".to_string(),
            local_border: "#1976D2".to_string(),
            global: "#2E7D32".to_string(),
            global_bg: "#E8F5E9".to_string(),
            global_border: "#388E3C".to_string(),
            llm: "#E65100".to_string(),
            llm_bg: "#FFF3E0".to_string(),
            llm_border: "#EF6C00".to_string(),
            method: "#F5F5F5".to_string(),
            text_primary: "#212121".to_string(),
            connector: "#616161".to_string(),
            arrow: "#616161".to_string(),
            decision: "#F39C12".to_string(),
            recommend: "#9B59B6".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}
