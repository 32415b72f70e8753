//! Pattern lookups over labelled entries.

use regex::Regex;
use rust_decimal::Decimal;

use super::classifier::Classifier;
use super::types::Bucket;
use crate::snapshot::{Field, LabeledEntry};

/// Returns the first entry whose label matches `pattern`.
///
/// Only the first match is ever used, even when several labels match.
pub fn find_by_pattern<'a, E: LabeledEntry>(entries: &'a [E], pattern: &Regex) -> Option<&'a E> {
    entries.iter().find(|entry| pattern.is_match(entry.label()))
}

/// Returns the first entry matching the configured pattern of `bucket`.
///
/// Buckets without a pattern (the generic loan bucket, `Other`) never match.
pub fn find_by_bucket<'a, E: LabeledEntry>(
    entries: &'a [E],
    classifier: &Classifier,
    bucket: Bucket,
) -> Option<&'a E> {
    classifier
        .pattern_for(bucket)
        .and_then(|pattern| find_by_pattern(entries, pattern))
}

/// Sums `value` over every entry whose label does NOT match `excluded`.
pub fn sum_excluding<E, F>(entries: &[E], excluded: &Regex, value: F) -> Decimal
where
    E: LabeledEntry,
    F: Fn(&E) -> Decimal,
{
    entries
        .iter()
        .filter(|entry| !excluded.is_match(entry.label()))
        .map(value)
        .sum()
}

/// Sums `value` over every loan entry that is not an instant loan.
///
/// Without an instant-loan pattern every entry counts.
pub fn sum_not_instant_loan<E, F>(entries: &[E], classifier: &Classifier, value: F) -> Decimal
where
    E: LabeledEntry,
    F: Fn(&E) -> Decimal,
{
    match classifier.pattern_for(Bucket::InstantLoan) {
        Some(pattern) => sum_excluding(entries, pattern, value),
        None => entries.iter().map(value).sum(),
    }
}

/// Reads `field` from an optional entry.
///
/// A missing entry, or an entry kind without that field, yields exactly zero.
#[must_use]
pub fn extract_field<E: LabeledEntry>(entry: Option<&E>, field: Field) -> Decimal {
    entry
        .and_then(|entry| entry.field(field))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::compile_pattern;
    use coop_shared::config::ClassificationRule;
    use crate::snapshot::{LineItem, LoanTypeEntry, SavingsTypeEntry};
    use rust_decimal_macros::dec;

    fn loan(label: &str, disbursed: Decimal) -> LoanTypeEntry {
        LoanTypeEntry {
            loan_type: label.to_string(),
            total_amount_disbursed: vec![LineItem { amount: disbursed }],
            ..LoanTypeEntry::default()
        }
    }

    fn savings(label: &str, amount: Decimal) -> SavingsTypeEntry {
        SavingsTypeEntry {
            label: label.to_string(),
            amount,
            ..SavingsTypeEntry::default()
        }
    }

    fn disbursed(entry: &LoanTypeEntry) -> Decimal {
        entry.total_amount_disbursed.iter().map(|line| line.amount).sum()
    }

    #[test]
    fn test_not_instant_loan_excludes_substring_matches() {
        let loans = vec![
            loan("Instant Loan Plus", dec!(300)),
            loan("Development Loan", dec!(1000)),
            loan("Emergency Loan", dec!(200)),
        ];
        let classifier = Classifier::standard();

        assert_eq!(
            sum_not_instant_loan(&loans, &classifier, disbursed),
            dec!(1200)
        );
    }

    #[test]
    fn test_sum_excluding_matches_classifier_path() {
        let loans = vec![
            loan("instant loan", dec!(50)),
            loan("Development Loan", dec!(1000)),
        ];
        let excluded = compile_pattern("Instant Loan").unwrap();

        assert_eq!(sum_excluding(&loans, &excluded, disbursed), dec!(1000));
        assert_eq!(
            sum_not_instant_loan(&loans, &Classifier::standard(), disbursed),
            dec!(1000)
        );
    }

    #[test]
    fn test_not_instant_loan_without_instant_rule_counts_everything() {
        let loans = vec![
            loan("Instant Loan", dec!(50)),
            loan("Development Loan", dec!(1000)),
        ];
        let classifier =
            Classifier::from_rules(&[ClassificationRule::new("holiday", "Holiday")]).unwrap();

        assert_eq!(
            sum_not_instant_loan(&loans, &classifier, disbursed),
            dec!(1050)
        );
    }

    #[test]
    fn test_find_by_pattern_uses_first_match() {
        let entries = vec![
            savings("Holiday Savings", dec!(10)),
            savings("Holiday Club", dec!(20)),
        ];
        let pattern = compile_pattern("holiday").unwrap();

        let found = find_by_pattern(&entries, &pattern).unwrap();
        assert_eq!(found.amount, dec!(10));
    }

    #[test]
    fn test_find_by_bucket() {
        let entries = vec![
            savings("Member Contribution", dec!(500)),
            savings("Share Capital", dec!(100)),
        ];
        let classifier = Classifier::standard();

        let found = find_by_bucket(&entries, &classifier, Bucket::ShareCapital).unwrap();
        assert_eq!(found.amount, dec!(100));
        assert!(find_by_bucket(&entries, &classifier, Bucket::Sodas).is_none());
        assert!(find_by_bucket(&entries, &classifier, Bucket::Loan).is_none());
    }

    #[test]
    fn test_extract_field_zero_defaults() {
        let entries: Vec<SavingsTypeEntry> = Vec::new();
        let pattern = compile_pattern("Share Capital").unwrap();

        let missing = find_by_pattern(&entries, &pattern);
        assert_eq!(extract_field(missing, Field::Amount), Decimal::ZERO);

        let entry = savings("Share Capital", dec!(75));
        assert_eq!(extract_field(Some(&entry), Field::Amount), dec!(75));
        assert_eq!(
            extract_field(Some(&entry), Field::TotalVentureDeposits),
            Decimal::ZERO
        );
    }
}
