//! Overall evolution verdict: classifies the patient's direction across all
//! trending parameters as improving, worsening, mixed or stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::series::ParameterSeries;
use crate::config::VerdictThresholds;

/// Qualitative summary plus the per-parameter bullets that support it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionVerdict {
    pub summary: String,
    pub insights: Vec<String>,
}

/// Classifies the overall direction from every parameter's last two points.
///
/// Parameters with fewer than two points contribute nothing. Returns `None`
/// when no parameter could be trended at all (empty map, or only single-point
/// series), so callers can show a neutral "no analysis yet" state.
pub fn evolution_verdict(
    series: &BTreeMap<String, ParameterSeries>,
    thresholds: &VerdictThresholds,
) -> Option<EvolutionVerdict> {
    let mut insights = Vec::new();
    let mut improving = 0u32;
    let mut worsening = 0u32;
    let mut stable = 0u32;

    for (param, info) in series {
        let [.., prev, last] = info.points.as_slice() else {
            continue;
        };

        let diff = last.value - prev.value;
        let pct = if prev.value != 0.0 {
            ((diff / prev.value) * 100.0).abs()
        } else {
            0.0
        };
        let last_normal = last.status.is_normal();
        let prev_normal = prev.status.is_normal();

        if last_normal && !prev_normal {
            improving += 1;
            insights.push(format!(
                "{param} returned to the reference range ({} → {})",
                prev.value, last.value
            ));
        } else if !last_normal && prev_normal {
            worsening += 1;
            insights.push(format!(
                "{param} left the reference range ({} → {})",
                prev.value, last.value
            ));
        } else if pct > thresholds.worsening_pct && !last_normal {
            worsening += 1;
            insights.push(format!(
                "{param} varied {pct:.1}% and remains outside the reference range"
            ));
        } else if diff.abs() < thresholds.stable_abs_diff {
            stable += 1;
        } else if last_normal {
            improving += 1;
        } else {
            stable += 1;
        }
    }

    if improving + worsening + stable == 0 {
        return None;
    }

    tracing::debug!(improving, worsening, stable, "evolution verdict computed");

    let summary = if improving > 0 && worsening == 0 {
        "Overall trend is positive. Indicators show favorable evolution since the last exam."
    } else if worsening > improving {
        "Attention: some parameters show worsening. Closer follow-up is recommended."
    } else if improving > 0 && worsening > 0 {
        "Mixed evolution: some indicators improve while others need attention."
    } else {
        "Indicators are stable across the most recent exams."
    };

    Some(EvolutionVerdict {
        summary: summary.into(),
        insights,
    })
}
