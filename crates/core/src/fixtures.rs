//! Shared snapshot fixtures for unit tests.

use crate::snapshot::StatementSnapshot;

/// Two months covering every section and bucket of the statement layout.
pub const TWO_MONTHS: &str = r#"{
    "year": 2024,
    "member": {"member_no": "M-014", "first_name": "Wanjiru", "last_name": "Kamau"},
    "monthly_summary": [
        {
            "month": "Jan 2024",
            "savings": {"by_type": [
                {"type": "Share Capital", "amount": 1000, "balance_brought_forward": 5000},
                {"type": "Member Contribution", "amount": 500, "balance_brought_forward": 2000},
                {"type": "Holiday", "amount": 200}
            ]},
            "ventures": {"by_type": [
                {"venture_type": "Sodas", "venture_deposits": [{"amount": 300}, {"amount": 50}],
                 "venture_payments": [{"amount": 100}],
                 "total_venture_deposits": 350, "total_venture_payments": 100,
                 "balance_brought_forward": 40}
            ]},
            "loans": {"by_type": [
                {"loan_type": "Development Loan",
                 "total_amount_disbursed": [{"amount": 10000}],
                 "total_amount_repaid": [{"amount": 1000}],
                 "total_interest_charged": [{"amount": 120}],
                 "total_amount_outstanding": 9000, "balance_brought_forward": 3000},
                {"loan_type": "Instant Loan",
                 "total_amount_disbursed": [{"amount": 2000}],
                 "total_amount_repaid": [{"amount": 500}],
                 "total_interest_charged": [{"amount": 30}],
                 "total_amount_outstanding": 1500}
            ]},
            "guarantees": {"active_balance": 750, "new_guarantees": 250}
        },
        {
            "month": "Feb 2024",
            "savings": {"by_type": [
                {"type": "Share Capital", "amount": 1000},
                {"type": "Member Contribution", "amount": 300}
            ]},
            "ventures": {"by_type": [
                {"venture_type": "Sodas", "venture_deposits": [{"amount": 80}],
                 "venture_payments": [], "total_venture_deposits": 80}
            ]},
            "loans": {"by_type": [
                {"loan_type": "Development Loan",
                 "total_amount_repaid": [{"amount": 1500}],
                 "total_interest_charged": [{"amount": 100}],
                 "total_amount_outstanding": 7500},
                {"loan_type": "School Fees Loan",
                 "total_amount_disbursed": [{"amount": 4000}],
                 "total_amount_outstanding": 4000}
            ]},
            "guarantees": {"transactions": [{"current_balance": 400}, {"current_balance": 100}]}
        }
    ],
    "chart_of_accounts": {
        "total_savings": 250000, "total_loans": 180000, "total_ventures": 12000,
        "total_savings_deposits": 90000,
        "total_savings_by_type": [{"type": "Share Capital", "amount": 150000}],
        "total_loans_by_type": [{"loan_type": "Development Loan", "total_outstanding_amount": 120000}]
    }
}"#;

pub fn two_months() -> StatementSnapshot {
    StatementSnapshot::from_json(TWO_MONTHS).unwrap()
}

pub fn empty() -> StatementSnapshot {
    StatementSnapshot::from_json(r#"{"year": 2024, "monthly_summary": []}"#).unwrap()
}
