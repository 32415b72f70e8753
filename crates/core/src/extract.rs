//! Amount extractors.
//!
//! Each extractor reduces one (month, type) entry to scalar totals. A missing
//! entry always produces the all-zero result so callers never special-case
//! sparse data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::snapshot::{GuaranteeSection, LineItem, LoanTypeEntry, SavingsTypeEntry, VentureTypeEntry};

/// Savings totals for one type in one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsAmounts {
    /// Period deposit total.
    pub deposit: Decimal,
}

/// Venture totals for one type in one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VentureAmounts {
    /// Sum of deposit line items.
    pub deposit: Decimal,
    /// Sum of payment line items.
    pub payment: Decimal,
    /// Producer's pre-summed deposits.
    pub reported_deposit: Decimal,
    /// Producer's pre-summed payments.
    pub reported_payment: Decimal,
}

impl VentureAmounts {
    /// Net flow into the venture (deposits minus payments).
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.deposit - self.payment
    }
}

/// Loan totals for one type in one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanAmounts {
    /// Sum of disbursements.
    pub disbursed: Decimal,
    /// Sum of repayments.
    pub repaid: Decimal,
    /// Sum of interest charges.
    pub interest: Decimal,
    /// Producer-reported outstanding amount (not summed).
    pub outstanding: Decimal,
}

impl LoanAmounts {
    /// Net flow into the loan book (disbursed minus repaid).
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.disbursed - self.repaid
    }
}

/// Guarantee figures for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuaranteeAmounts {
    /// Active guaranteed balance.
    pub active_balance: Decimal,
    /// Guarantees issued in the month.
    pub new_guarantees: Decimal,
}

/// Named guarantee fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuaranteeField {
    /// Active guaranteed balance.
    ActiveBalance,
    /// Guarantees issued in the month.
    NewGuarantees,
}

fn sum_lines(lines: &[LineItem]) -> Decimal {
    lines.iter().map(|line| line.amount).sum()
}

/// Extracts savings totals.
#[must_use]
pub fn savings(entry: Option<&SavingsTypeEntry>) -> SavingsAmounts {
    entry.map_or_else(SavingsAmounts::default, |entry| SavingsAmounts {
        deposit: entry.amount,
    })
}

/// Extracts venture totals.
#[must_use]
pub fn ventures(entry: Option<&VentureTypeEntry>) -> VentureAmounts {
    entry.map_or_else(VentureAmounts::default, |entry| VentureAmounts {
        deposit: sum_lines(&entry.venture_deposits),
        payment: sum_lines(&entry.venture_payments),
        reported_deposit: entry.total_venture_deposits,
        reported_payment: entry.total_venture_payments,
    })
}

/// Extracts loan totals.
#[must_use]
pub fn loans(entry: Option<&LoanTypeEntry>) -> LoanAmounts {
    entry.map_or_else(LoanAmounts::default, |entry| LoanAmounts {
        disbursed: sum_lines(&entry.total_amount_disbursed),
        repaid: sum_lines(&entry.total_amount_repaid),
        interest: sum_lines(&entry.total_interest_charged),
        outstanding: entry.total_amount_outstanding,
    })
}

/// Reads one guarantee field.
///
/// A scalar supplied by the producer wins. Without one, `ActiveBalance` is
/// the sum of the transactions' current balances and `NewGuarantees` is zero.
#[must_use]
pub fn guarantee_field(section: Option<&GuaranteeSection>, field: GuaranteeField) -> Decimal {
    let Some(section) = section else {
        return Decimal::ZERO;
    };

    match field {
        GuaranteeField::ActiveBalance => section.active_balance.unwrap_or_else(|| {
            section
                .transactions
                .iter()
                .map(|transaction| transaction.current_balance)
                .sum()
        }),
        GuaranteeField::NewGuarantees => section.new_guarantees.unwrap_or(Decimal::ZERO),
    }
}

/// Extracts both guarantee figures.
#[must_use]
pub fn guarantees(section: Option<&GuaranteeSection>) -> GuaranteeAmounts {
    GuaranteeAmounts {
        active_balance: guarantee_field(section, GuaranteeField::ActiveBalance),
        new_guarantees: guarantee_field(section, GuaranteeField::NewGuarantees),
    }
}
