//! Engine configuration: verdict thresholds and the bundled panel
//! definitions. Both are plain data handed to the analysis functions, so
//! callers can substitute their own without touching engine logic.

use serde::{Deserialize, Serialize};

use crate::evolution::panels::{PanelConfig, PanelDefinition};

/// Tuning knobs for the evolution verdict.
///
/// The 10% variation threshold mirrors the clinic application's historical
/// behavior; it carries no documented clinical justification and is kept
/// overridable for that reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictThresholds {
    /// Percentage change above which a still-abnormal parameter counts as
    /// worsening.
    pub worsening_pct: f64,
    /// Absolute difference below which a two-point trend counts as stable.
    pub stable_abs_diff: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            worsening_pct: 10.0,
            stable_abs_diff: 0.01,
        }
    }
}

/// Panel ids used by the bundled configuration.
pub const PANEL_RED_SERIES: &str = "red_series";
pub const PANEL_WHITE_SERIES: &str = "white_series";
pub const PANEL_URINALYSIS: &str = "urinalysis";

/// The curated keyword lists shipped with the clinic application, in display
/// priority order (red series first). Keywords are matched by containment
/// against the normalized parameter name, so accented and unaccented
/// spellings are interchangeable.
pub fn default_panels() -> PanelConfig {
    PanelConfig::new(vec![
        PanelDefinition {
            id: PANEL_RED_SERIES.into(),
            label: "Red blood series".into(),
            keywords: vec![
                "eritrócitos".into(),
                "eritrocitos".into(),
                "hemácias".into(),
                "hemacias".into(),
                "hemoglobina".into(),
                "hb".into(),
                "hematócrito".into(),
                "hematocrito".into(),
                "ht".into(),
                "htc".into(),
                "vcm".into(),
                "vgm".into(),
                "hcm".into(),
                "chcm".into(),
                "chgm".into(),
                "rdw".into(),
            ],
        },
        PanelDefinition {
            id: PANEL_WHITE_SERIES.into(),
            label: "White blood series".into(),
            keywords: vec![
                "leucócitos".into(),
                "leucocitos".into(),
                "wbc".into(),
                "neutrófilos".into(),
                "neutrofilos".into(),
                "segmentados".into(),
                "bastonetes".into(),
                "bastões".into(),
                "bastoes".into(),
                "linfócitos".into(),
                "linfocitos".into(),
                "monócitos".into(),
                "monocitos".into(),
                "eosinófilos".into(),
                "eosinofilos".into(),
                "basófilos".into(),
                "basofilos".into(),
                "plaquetas".into(),
                "plt".into(),
            ],
        },
        PanelDefinition {
            id: PANEL_URINALYSIS.into(),
            label: "Urinalysis".into(),
            keywords: vec![
                "densidade".into(),
                "ph".into(),
                "proteína".into(),
                "proteina".into(),
                "proteínas".into(),
                "proteinas".into(),
                "glicose".into(),
                "glucose".into(),
                "cetona".into(),
                "cetonas".into(),
                "corpos cetônicos".into(),
                "bilirrubina".into(),
                "urobilinogênio".into(),
                "urobilinogenio".into(),
                "hemoglobina urinária".into(),
                "sangue".into(),
                "leucócitos urinários".into(),
                "leucocitos urinarios".into(),
                "nitrito".into(),
                "nitritos".into(),
                "cristais".into(),
                "cilindros".into(),
                "células epiteliais".into(),
            ],
        },
    ])
}
