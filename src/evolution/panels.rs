//! Panel classification: decides which chart bucket(s) a parameter belongs
//! to. Matching is deliberately loose (substring containment on normalized
//! names) and is never used to merge data between series.

use serde::{Deserialize, Serialize};

use super::normalize::normalize_label;

/// One clinical panel and the substrings that place a parameter on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelDefinition {
    pub id: String,
    pub label: String,
    pub keywords: Vec<String>,
}

/// An ordered set of panel definitions. Vec order is the display priority
/// used when a single bucket must be chosen.
///
/// Keywords are normalized once at construction, so classification only
/// normalizes the incoming name.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    panels: Vec<PanelDefinition>,
    // Normalized keyword lists, parallel to `panels`.
    normalized_keywords: Vec<Vec<String>>,
}

impl PanelConfig {
    pub fn new(panels: Vec<PanelDefinition>) -> Self {
        let normalized_keywords = panels
            .iter()
            .map(|p| p.keywords.iter().map(|kw| normalize_label(kw)).collect())
            .collect();
        Self {
            panels,
            normalized_keywords,
        }
    }

    pub fn panels(&self) -> &[PanelDefinition] {
        &self.panels
    }

    fn matching_indices<'a>(&'a self, normalized: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.normalized_keywords
            .iter()
            .enumerate()
            .filter(move |(_, keywords)| keywords.iter().any(|kw| normalized.contains(kw.as_str())))
            .map(|(idx, _)| idx)
    }

    /// All panels whose keyword list matches the parameter name, in config
    /// order. A name may match zero, one or several panels.
    pub fn classify(&self, raw_name: &str) -> Vec<&PanelDefinition> {
        let normalized = normalize_label(raw_name);
        if normalized.is_empty() {
            return Vec::new();
        }
        self.matching_indices(&normalized)
            .map(|idx| &self.panels[idx])
            .collect()
    }

    /// First matching panel in config order, for callers that need exactly
    /// one display bucket.
    pub fn primary_panel(&self, raw_name: &str) -> Option<&PanelDefinition> {
        let normalized = normalize_label(raw_name);
        if normalized.is_empty() {
            return None;
        }
        let panel = self
            .matching_indices(&normalized)
            .next()
            .map(|idx| &self.panels[idx]);
        panel
    }
}
