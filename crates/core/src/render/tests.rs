//! Renderer tests across views.

use coop_shared::config::ColumnPriority;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::classify::{Classifier, Section};
use crate::fixtures;
use crate::snapshot::{
    LineItem, LoanTypeEntry, LoansSection, RawMonthSnapshot, SavingsSection, SavingsTypeEntry,
    StatementSnapshot,
};
use crate::summary::{AggregationBuilder, MonthlyAggregation};

fn aggregate(snapshot: &StatementSnapshot) -> MonthlyAggregation {
    let classifier = Classifier::standard();
    let priority = ColumnPriority::default();
    AggregationBuilder::new(&classifier, &priority).build(snapshot)
}

fn statement(snapshot: &StatementSnapshot) -> BankStatement {
    bank_statement(&aggregate(snapshot), &Classifier::standard())
        .ready()
        .unwrap()
}

fn loan(label: &str, disbursed: Decimal) -> LoanTypeEntry {
    LoanTypeEntry {
        loan_type: label.to_string(),
        total_amount_disbursed: vec![LineItem { amount: disbursed }],
        ..LoanTypeEntry::default()
    }
}

#[test]
fn test_statement_has_sixteen_columns_and_bf_row() {
    let statement = statement(&fixtures::two_months());

    assert_eq!(BankStatement::header().len(), STATEMENT_WIDTH);
    assert_eq!(statement.lines.len(), 3);
    assert_eq!(statement.lines[0].label, "BF");
    for line in &statement.lines {
        assert_eq!(line.cells().len(), STATEMENT_WIDTH);
    }
}

#[test]
fn test_statement_brought_forward_row() {
    let statement = statement(&fixtures::two_months());
    let bf = statement.brought_forward().unwrap();

    assert_eq!(bf.shares, dec!(5000));
    assert_eq!(bf.deposits.balance, dec!(2000));
    assert_eq!(bf.deposits.received, Decimal::ZERO);
    assert_eq!(bf.loans.balance, dec!(3000));
    assert_eq!(bf.instant_loans.balance, Decimal::ZERO);
    assert_eq!(bf.other.total(), Decimal::ZERO);
}

#[test]
fn test_statement_month_rows() {
    let statement = statement(&fixtures::two_months());
    let months = statement.months();

    let january = &months[0];
    assert_eq!(january.label, "Jan 2024");
    assert_eq!(january.shares, dec!(1000));
    assert_eq!(january.deposits.received, dec!(500));
    assert_eq!(january.deposits.withdraw, Decimal::ZERO);
    assert_eq!(january.deposits.balance, dec!(500));
    assert_eq!(
        january.loans,
        LoanColumns {
            loaned: dec!(10000),
            repaid: dec!(1000),
            balance: dec!(9000),
            interest: dec!(120),
        }
    );
    assert_eq!(
        january.instant_loans,
        LoanColumns {
            loaned: dec!(2000),
            repaid: dec!(500),
            balance: dec!(1500),
            interest: dec!(30),
        }
    );
    assert_eq!(january.other.holiday, dec!(200));
    assert_eq!(january.other.sodas, dec!(350));
    assert_eq!(january.other.guarantees, dec!(750));
    assert_eq!(january.other.total(), dec!(1300));

    let february = &months[1];
    assert_eq!(february.shares, dec!(2000));
    assert_eq!(february.deposits.balance, dec!(800));
    // Development Loan and School Fees Loan summed.
    assert_eq!(february.loans.loaned, dec!(4000));
    assert_eq!(february.loans.balance, dec!(11500));
    // No instant-loan entry in February.
    assert_eq!(february.instant_loans, LoanColumns::default());
    assert_eq!(february.other.holiday, Decimal::ZERO);
    assert_eq!(february.other.total(), dec!(580));
    assert_eq!(february.cells()[15], "580.00");
}

#[test]
fn test_instant_loan_plus_excluded_from_loans() {
    let snapshot = StatementSnapshot {
        monthly_summary: vec![RawMonthSnapshot {
            month: Some("Mar 2024".to_string()),
            loans: LoansSection {
                by_type: vec![
                    loan("Instant Loan Plus", dec!(700)),
                    loan("Development Loan", dec!(5000)),
                ],
            },
            ..RawMonthSnapshot::default()
        }],
        ..StatementSnapshot::default()
    };

    let statement = statement(&snapshot);
    let march = &statement.months()[0];

    assert_eq!(march.loans.loaned, dec!(5000));
    assert_eq!(march.instant_loans.loaned, dec!(700));
}

fn savings(label: &str, amount: Decimal) -> SavingsTypeEntry {
    SavingsTypeEntry {
        label: label.to_string(),
        amount,
        ..SavingsTypeEntry::default()
    }
}

fn month(
    label: &str,
    savings_entries: Vec<SavingsTypeEntry>,
    loans: Vec<LoanTypeEntry>,
) -> RawMonthSnapshot {
    RawMonthSnapshot {
        month: Some(label.to_string()),
        savings: SavingsSection {
            by_type: savings_entries,
        },
        loans: LoansSection { by_type: loans },
        ..RawMonthSnapshot::default()
    }
}

#[test]
fn test_statement_matches_each_month_by_its_own_labels() {
    let snapshot = StatementSnapshot {
        monthly_summary: vec![
            month(
                "Jan 2024",
                vec![savings("Share Capital", dec!(100))],
                vec![loan("Instant Loan", dec!(100))],
            ),
            month(
                "Feb 2024",
                vec![savings("Share Capital (Ordinary)", dec!(50))],
                vec![loan("Instant Loan Plus", dec!(200))],
            ),
        ],
        ..StatementSnapshot::default()
    };

    let statement = statement(&snapshot);
    let january = &statement.months()[0];
    let february = &statement.months()[1];

    assert_eq!(january.instant_loans.loaned, dec!(100));
    assert_eq!(january.instant_loans.balance, dec!(100));
    assert_eq!(january.shares, dec!(100));

    assert_eq!(february.instant_loans.loaned, dec!(200));
    assert_eq!(february.instant_loans.balance, dec!(200));
    assert_eq!(february.loans, LoanColumns::default());
    assert_eq!(february.shares, dec!(50));
}

#[test]
fn test_statement_uses_first_matching_entry_of_the_month() {
    let snapshot = StatementSnapshot {
        monthly_summary: vec![
            month("Jan 2024", vec![], vec![loan("Instant Loan", dec!(10))]),
            month(
                "Feb 2024",
                vec![],
                vec![
                    loan("Instant Loan Plus", dec!(30)),
                    loan("Instant Loan", dec!(20)),
                    loan("Development Loan", dec!(500)),
                ],
            ),
        ],
        ..StatementSnapshot::default()
    };

    let statement = statement(&snapshot);
    let february = &statement.months()[1];

    // Universe order puts "Instant Loan" first; February's own order wins.
    assert_eq!(february.instant_loans.loaned, dec!(30));
    assert_eq!(february.loans.loaned, dec!(500));
}

#[test]
fn test_statement_follows_configured_instant_loan_pattern() {
    let classifier = Classifier::from_rules(&[coop_shared::config::ClassificationRule::new(
        "instant_loan",
        "Quick",
    )])
    .unwrap();
    let snapshot = StatementSnapshot {
        monthly_summary: vec![month(
            "Jan 2024",
            vec![],
            vec![loan("Quick Cash", dec!(40)), loan("Instant Loan", dec!(60))],
        )],
        ..StatementSnapshot::default()
    };

    let statement = bank_statement(&aggregate(&snapshot), &classifier).ready().unwrap();
    let january = &statement.months()[0];

    assert_eq!(january.instant_loans.loaned, dec!(40));
    assert_eq!(january.loans.loaned, dec!(60));
}

#[test]
fn test_unmatched_types_absent_from_statement() {
    let mut snapshot = fixtures::two_months();
    for month in &mut snapshot.monthly_summary {
        for entry in &mut month.savings.by_type {
            entry.label = format!("Legacy {}", entry.label.len());
        }
    }

    let statement = statement(&snapshot);

    for line in &statement.lines {
        assert_eq!(line.shares, Decimal::ZERO);
        assert_eq!(line.deposits, DepositColumns::default());
        assert_eq!(line.other.holiday, Decimal::ZERO);
    }
}

#[test]
fn test_detail_and_accordion_agree() {
    let aggregation = aggregate(&fixtures::two_months());
    let grid = detail_grid(&aggregation).ready().unwrap();
    let view = accordion(&aggregation, &AccordionState::new())
        .ready()
        .unwrap();

    for (row, panel) in grid.rows.iter().zip(&view.panels) {
        assert_eq!(row.month, panel.title);
    }
    for section in Section::ALL {
        for column in aggregation.universe.section(section) {
            for month in 0..aggregation.months.len() {
                let cells = grid.group_cells(month, section, &column.label).unwrap();
                let pairs: Vec<&str> = view
                    .group(month, section, &column.label)
                    .unwrap()
                    .pairs
                    .iter()
                    .map(|(_, value)| value.as_str())
                    .collect();
                assert_eq!(cells, pairs.as_slice());
            }
        }
    }
}

#[test]
fn test_yearly_rollup_totals() {
    let snapshot = fixtures::two_months();
    let rollup = yearly_rollup(&aggregate(&snapshot), snapshot.chart_of_accounts.as_ref())
        .ready()
        .unwrap();

    let contribution = rollup.row(Section::Savings, "Member Contribution").unwrap();
    assert_eq!(contribution.brought_forward, dec!(2000));
    assert_eq!(contribution.deposits, dec!(800));
    assert_eq!(contribution.closing_balance, dec!(800));

    let development = rollup.row(Section::Loans, "Development Loan").unwrap();
    assert_eq!(development.disbursed, dec!(10000));
    assert_eq!(development.repaid, dec!(2500));
    assert_eq!(development.interest, dec!(220));
    assert_eq!(development.closing_balance, dec!(7500));
    assert_eq!(development.outstanding, dec!(7500));
    assert_eq!(
        development.cells(Section::Loans),
        ["3000.00", "10000.00", "2500.00", "220.00", "7500.00", "7500.00"]
    );

    assert_eq!(rollup.footer.len(), 6);
    assert_eq!(rollup.footer[2].value, "180000.00");
}

#[test]
fn test_yearly_rollup_without_chart() {
    let rollup = yearly_rollup(&aggregate(&fixtures::two_months()), None)
        .ready()
        .unwrap();

    assert!(rollup.footer.is_empty());
    assert_eq!(rollup.sections.len(), 3);
}

#[test]
fn test_every_renderer_reports_no_data() {
    let snapshot = fixtures::empty();
    let aggregation = aggregate(&snapshot);

    assert!(detail_grid(&aggregation).is_no_data());
    assert!(condensed_grid(&aggregation).is_no_data());
    assert!(accordion(&aggregation, &AccordionState::new()).is_no_data());
    assert!(bank_statement(&aggregation, &Classifier::standard()).is_no_data());
    assert!(yearly_rollup(&aggregation, snapshot.chart_of_accounts.as_ref()).is_no_data());

    let rendered = bank_statement(&aggregation, &Classifier::standard());
    let json = serde_json::to_value(rendered).unwrap();
    assert_eq!(json["state"], "no_data");
    assert_eq!(json["view"]["message"], "No data available");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Zero-filled loan months render "0.00" in every statement cell they
    /// touch and never change the column count.
    #[test]
    fn prop_statement_width_is_fixed(
        amounts in prop::collection::vec(proptest::option::of(0i64..1_000_000i64), 1..12),
    ) {
        let snapshot = StatementSnapshot {
            monthly_summary: amounts
                .iter()
                .map(|amount| RawMonthSnapshot {
                    loans: LoansSection {
                        by_type: amount
                            .map(|cents| vec![loan("Development Loan", Decimal::new(cents, 2))])
                            .unwrap_or_default(),
                    },
                    ..RawMonthSnapshot::default()
                })
                .collect(),
            ..StatementSnapshot::default()
        };

        let statement = statement(&snapshot);

        prop_assert_eq!(statement.lines.len(), amounts.len() + 1);
        for (line, amount) in statement.months().iter().zip(&amounts) {
            let cells = line.cells();
            prop_assert_eq!(cells.len(), STATEMENT_WIDTH);
            if amount.is_none() {
                prop_assert_eq!(cells[4].as_str(), "0.00");
            }
        }
    }
}
