//! Type universe discovery.

use std::collections::HashSet;

use coop_shared::config::ColumnPriority;

use super::types::{TypeColumn, TypeUniverse};
use crate::classify::{Classifier, Section};
use crate::snapshot::{LabeledEntry, RawMonthSnapshot};

/// Collects distinct labels in first-seen order.
fn first_seen<'a, E, I>(entries: I) -> Vec<String>
where
    E: LabeledEntry + 'a,
    I: Iterator<Item = &'a E>,
{
    let mut seen = HashSet::new();
    let mut labels = Vec::new();
    for entry in entries {
        if seen.insert(entry.label()) {
            labels.push(entry.label().to_string());
        }
    }
    labels
}

/// Applies the declared priority: listed labels first, in declared order,
/// then the rest in first-seen order. Listed labels that never occur are
/// not added.
fn apply_priority(labels: Vec<String>, priority: &[String]) -> Vec<String> {
    let mut ordered: Vec<String> = priority
        .iter()
        .filter(|wanted| labels.contains(wanted))
        .fold(Vec::new(), |mut acc, wanted| {
            if !acc.contains(wanted) {
                acc.push(wanted.clone());
            }
            acc
        });

    for label in labels {
        if !ordered.contains(&label) {
            ordered.push(label);
        }
    }
    ordered
}

fn columns(
    labels: Vec<String>,
    priority: &[String],
    classifier: &Classifier,
    section: Section,
) -> Vec<TypeColumn> {
    apply_priority(labels, priority)
        .into_iter()
        .map(|label| TypeColumn {
            bucket: classifier.classify_in(section, &label),
            label,
        })
        .collect()
}

impl TypeUniverse {
    /// Derives the universe by visiting every month once.
    ///
    /// Each label is classified exactly once here.
    #[must_use]
    pub fn derive(
        months: &[RawMonthSnapshot],
        classifier: &Classifier,
        priority: &ColumnPriority,
    ) -> Self {
        let savings = first_seen(months.iter().flat_map(|month| &month.savings.by_type));
        let ventures = first_seen(months.iter().flat_map(|month| &month.ventures.by_type));
        let loans = first_seen(months.iter().flat_map(|month| &month.loans.by_type));

        Self {
            savings: columns(savings, &priority.savings, classifier, Section::Savings),
            ventures: columns(ventures, &priority.ventures, classifier, Section::Ventures),
            loans: columns(loans, &priority.loans, classifier, Section::Loans),
        }
    }
}
