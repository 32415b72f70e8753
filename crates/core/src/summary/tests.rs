//! Aggregation builder tests.

use coop_shared::config::ColumnPriority;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::builder::AggregationBuilder;
use super::types::MonthlyAggregation;
use crate::classify::{Bucket, Classifier, Section};
use crate::fixtures;
use crate::snapshot::{RawMonthSnapshot, SavingsSection, SavingsTypeEntry, StatementSnapshot};

fn build(snapshot: &StatementSnapshot) -> MonthlyAggregation {
    let classifier = Classifier::standard();
    let priority = ColumnPriority::default();
    AggregationBuilder::new(&classifier, &priority).build(snapshot)
}

fn savings_month(entries: &[(&str, Decimal)]) -> RawMonthSnapshot {
    RawMonthSnapshot {
        month: Some("Month".to_string()),
        savings: SavingsSection {
            by_type: entries
                .iter()
                .map(|(label, amount)| SavingsTypeEntry {
                    label: (*label).to_string(),
                    amount: *amount,
                    ..SavingsTypeEntry::default()
                })
                .collect(),
        },
        ..RawMonthSnapshot::default()
    }
}

fn savings_snapshot(months: Vec<RawMonthSnapshot>) -> StatementSnapshot {
    StatementSnapshot {
        year: Some(2024),
        monthly_summary: months,
        ..StatementSnapshot::default()
    }
}

#[test]
fn test_single_month_contribution() {
    let snapshot = savings_snapshot(vec![savings_month(&[("Member Contribution", dec!(500))])]);

    let aggregation = build(&snapshot);

    let figures = aggregation.figures(0, Section::Savings, "Member Contribution");
    assert_eq!(figures.deposit, dec!(500));
    assert_eq!(figures.balance, dec!(500));
    assert_eq!(aggregation.brought_forward.savings, vec![Decimal::ZERO]);
}

#[test]
fn test_two_months_accumulate() {
    let snapshot = savings_snapshot(vec![
        savings_month(&[("Member Contribution", dec!(500))]),
        savings_month(&[("Member Contribution", dec!(300))]),
    ]);

    let aggregation = build(&snapshot);

    let balances: Vec<Decimal> = (0..2)
        .map(|i| aggregation.figures(i, Section::Savings, "Member Contribution").balance)
        .collect();
    assert_eq!(balances, vec![dec!(500), dec!(800)]);
}

#[test]
fn test_fixture_figures_per_section() {
    let aggregation = build(&fixtures::two_months());

    assert_eq!(
        aggregation.universe.labels(Section::Savings),
        vec!["Share Capital", "Member Contribution", "Holiday"]
    );
    assert_eq!(
        aggregation.universe.labels(Section::Loans),
        vec!["Development Loan", "Instant Loan", "School Fees Loan"]
    );

    // Holiday has no February entry and carries forward.
    let holiday = aggregation.figures(1, Section::Savings, "Holiday");
    assert_eq!(holiday.deposit, Decimal::ZERO);
    assert_eq!(holiday.balance, dec!(200));

    let sodas_jan = aggregation.figures(0, Section::Ventures, "Sodas");
    assert_eq!(sodas_jan.deposit, dec!(350));
    assert_eq!(sodas_jan.payment, dec!(100));
    assert_eq!(sodas_jan.balance, dec!(250));
    assert_eq!(sodas_jan.reported_deposit, dec!(350));
    assert_eq!(aggregation.figures(1, Section::Ventures, "Sodas").balance, dec!(330));

    let development = aggregation.figures(1, Section::Loans, "Development Loan");
    assert_eq!(development.repaid, dec!(1500));
    assert_eq!(development.interest, dec!(100));
    assert_eq!(development.outstanding, dec!(7500));
    assert_eq!(development.balance, dec!(7500));

    let school_fees_jan = aggregation.figures(0, Section::Loans, "School Fees Loan");
    assert_eq!(school_fees_jan, super::Figures::default());
}

#[test]
fn test_buckets_assigned_once_per_column() {
    let aggregation = build(&fixtures::two_months());
    let buckets: Vec<Bucket> = aggregation
        .universe
        .loans
        .iter()
        .map(|column| column.bucket)
        .collect();

    assert_eq!(buckets, vec![Bucket::Loan, Bucket::InstantLoan, Bucket::Loan]);
    assert_eq!(aggregation.universe.ventures[0].bucket, Bucket::Sodas);
}

#[test]
fn test_brought_forward_from_first_month() {
    let aggregation = build(&fixtures::two_months());
    let bf = &aggregation.brought_forward;

    assert_eq!(bf.savings, vec![dec!(5000), dec!(2000), Decimal::ZERO]);
    assert_eq!(bf.ventures, vec![dec!(40)]);
    // School Fees Loan is absent in the first month.
    assert_eq!(bf.loans, vec![dec!(3000), Decimal::ZERO, Decimal::ZERO]);
    assert_eq!(bf.guarantees.active_balance, dec!(750));
}

#[test]
fn test_guarantees_per_month() {
    let aggregation = build(&fixtures::two_months());

    assert_eq!(aggregation.months[0].guarantees.active_balance, dec!(750));
    assert_eq!(aggregation.months[0].guarantees.new_guarantees, dec!(250));
    assert_eq!(aggregation.months[1].guarantees.active_balance, dec!(500));
    assert_eq!(aggregation.months[1].guarantees.new_guarantees, Decimal::ZERO);
}

#[test]
fn test_duplicate_label_in_month_uses_first() {
    let snapshot = savings_snapshot(vec![savings_month(&[
        ("Holiday", dec!(10)),
        ("Holiday", dec!(99)),
    ])]);

    let aggregation = build(&snapshot);

    assert_eq!(aggregation.universe.savings.len(), 1);
    assert_eq!(aggregation.figures(0, Section::Savings, "Holiday").balance, dec!(10));
}

#[test]
fn test_month_entries_keep_snapshot_order() {
    let snapshot = savings_snapshot(vec![
        savings_month(&[("Holiday", dec!(10))]),
        savings_month(&[
            ("Share Capital", dec!(5)),
            ("Holiday", dec!(20)),
            ("Share Capital", dec!(7)),
        ]),
    ]);

    let aggregation = build(&snapshot);
    let entries = &aggregation.months[1].entries.savings;

    assert_eq!(aggregation.months[0].entries.savings.len(), 1);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, "Share Capital");
    assert_eq!(entries[1].label, "Holiday");
    assert_eq!(
        aggregation.months[1]
            .figures_of(Section::Savings, &entries[0])
            .deposit,
        dec!(5)
    );
    assert!(aggregation.months[1].entries.loans.is_empty());
}

#[test]
fn test_declared_column_order() {
    let classifier = Classifier::standard();
    let priority = ColumnPriority {
        loans: vec!["School Fees Loan".to_string()],
        ..ColumnPriority::default()
    };

    let aggregation = AggregationBuilder::new(&classifier, &priority).build(&fixtures::two_months());

    assert_eq!(
        aggregation.universe.labels(Section::Loans),
        vec!["School Fees Loan", "Development Loan", "Instant Loan"]
    );
    assert_eq!(aggregation.months[1].loans[0].disbursed, dec!(4000));
}

#[test]
fn test_empty_snapshot() {
    let aggregation = build(&fixtures::empty());

    assert!(aggregation.is_empty());
    assert!(aggregation.universe.is_empty());
    assert_eq!(aggregation.brought_forward, super::BroughtForward::default());
}

#[test]
fn test_unknown_lookup_is_zero() {
    let aggregation = build(&fixtures::two_months());

    assert!(aggregation.lookup(0, Section::Savings, "Pension").is_none());
    assert_eq!(
        aggregation.figures(9, Section::Savings, "Share Capital"),
        super::Figures::default()
    );
}

#[test]
fn test_build_is_deterministic() {
    let snapshot = fixtures::two_months();

    let first = serde_json::to_string(&build(&snapshot)).unwrap();
    let second = serde_json::to_string(&build(&snapshot)).unwrap();

    assert_eq!(first, second);
}

fn label_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["Share Capital", "Member Contribution", "Holiday", "Sodas"])
}

fn months_strategy() -> impl Strategy<Value = Vec<Vec<(&'static str, i64)>>> {
    prop::collection::vec(
        prop::collection::vec((label_strategy(), 0i64..1_000_000i64), 0..4),
        1..12,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every month carries one figure per universe column, and each balance
    /// is the previous balance plus the month's deposit.
    #[test]
    fn prop_columns_complete_and_additive(months in months_strategy()) {
        let raw: Vec<RawMonthSnapshot> = months
            .iter()
            .map(|entries| {
                let entries: Vec<(&str, Decimal)> = entries
                    .iter()
                    .map(|(label, cents)| (*label, Decimal::new(*cents, 2)))
                    .collect();
                savings_month(&entries)
            })
            .collect();
        let aggregation = build(&savings_snapshot(raw));

        for month in &aggregation.months {
            prop_assert_eq!(month.savings.len(), aggregation.universe.savings.len());
        }
        for column in &aggregation.universe.savings {
            let mut previous = Decimal::ZERO;
            for i in 0..aggregation.months.len() {
                let figures = aggregation.figures(i, Section::Savings, &column.label);
                prop_assert_eq!(figures.balance, previous + figures.deposit);
                previous = figures.balance;
            }
        }
    }

    /// Building twice yields identical output.
    #[test]
    fn prop_deterministic(months in months_strategy()) {
        let raw: Vec<RawMonthSnapshot> = months
            .iter()
            .map(|entries| {
                let entries: Vec<(&str, Decimal)> = entries
                    .iter()
                    .map(|(label, cents)| (*label, Decimal::new(*cents, 2)))
                    .collect();
                savings_month(&entries)
            })
            .collect();
        let snapshot = savings_snapshot(raw);

        prop_assert_eq!(build(&snapshot), build(&snapshot));
    }
}
