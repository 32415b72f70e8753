//! Accordion view: one collapsible panel per month.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::detail::{VentureSource, sub_columns, values};
use super::format;
use super::outcome::RenderOutcome;
use crate::classify::Section;
use crate::summary::{MonthlyAggregation, MonthlySummary};

/// Expanded panels, keyed by month label.
///
/// Held by the host and never derived from data; every panel starts
/// collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    expanded: HashSet<String>,
}

impl AccordionState {
    /// All panels collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips one panel and returns its new state.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        }
    }

    /// Returns true when the panel is expanded.
    #[must_use]
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Collapses every panel.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}

/// Label/value pairs of one type within a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelGroup {
    /// Section of the type.
    pub section: Section,
    /// Type label.
    pub label: String,
    /// (caption, formatted value) pairs.
    pub pairs: Vec<(String, String)>,
}

/// One month's panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionPanel {
    /// Toggle key: the month label, or the row position when unlabeled.
    pub key: String,
    /// Month title.
    pub title: String,
    /// Whether the panel is open.
    pub expanded: bool,
    /// Per-type groups in column order.
    pub groups: Vec<PanelGroup>,
    /// Guarantee pairs.
    pub guarantees: Vec<(String, String)>,
}

/// The accordion view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionView {
    /// Panels in month order.
    pub panels: Vec<AccordionPanel>,
}

impl AccordionView {
    /// The group of one type in one panel.
    #[must_use]
    pub fn group(&self, panel: usize, section: Section, label: &str) -> Option<&PanelGroup> {
        self.panels.get(panel).and_then(|panel| {
            panel
                .groups
                .iter()
                .find(|group| group.section == section && group.label == label)
        })
    }
}

/// Toggle key for a month.
#[must_use]
pub fn panel_key(month: &MonthlySummary) -> String {
    match month.month.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => format!("#{}", month.index),
    }
}

/// Renders the accordion view.
#[must_use]
pub fn accordion(
    aggregation: &MonthlyAggregation,
    state: &AccordionState,
) -> RenderOutcome<AccordionView> {
    if aggregation.is_empty() {
        return RenderOutcome::no_data();
    }

    let panels = aggregation
        .months
        .iter()
        .map(|month| {
            let key = panel_key(month);
            let groups = Section::ALL
                .iter()
                .flat_map(|section| {
                    aggregation
                        .universe
                        .section(*section)
                        .iter()
                        .zip(month.section(*section))
                        .map(move |(column, figures)| PanelGroup {
                            section: *section,
                            label: format::label(&column.label),
                            pairs: sub_columns(*section)
                                .iter()
                                .zip(values(*section, figures, VentureSource::LineItems))
                                .map(|(caption, value)| {
                                    ((*caption).to_string(), format::amount(value))
                                })
                                .collect(),
                        })
                })
                .collect();

            AccordionPanel {
                expanded: state.is_expanded(&key),
                title: format::optional_label(month.month.as_deref()),
                key,
                groups,
                guarantees: vec![
                    (
                        "Active Guarantees".to_string(),
                        format::amount(month.guarantees.active_balance),
                    ),
                    (
                        "New Guarantees".to_string(),
                        format::amount(month.guarantees.new_guarantees),
                    ),
                ],
            }
        })
        .collect();

    RenderOutcome::Ready(AccordionView { panels })
}
