//! Uniform access to labelled per-type entries.

use rust_decimal::Decimal;

use super::types::{LoanTypeEntry, SavingsTypeEntry, VentureTypeEntry};

/// Scalar fields that can be read off a per-type entry by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Savings period deposit total.
    Amount,
    /// Opening balance.
    BalanceBroughtForward,
    /// Producer-reported closing balance.
    BalanceCarriedForward,
    /// Producer-reported loan outstanding.
    TotalAmountOutstanding,
    /// Pre-summed venture deposits.
    TotalVentureDeposits,
    /// Pre-summed venture payments.
    TotalVenturePayments,
}

/// An entry identified by a free-text type label.
pub trait LabeledEntry {
    /// The raw type label (`type`, `loan_type` or `venture_type`).
    fn label(&self) -> &str;

    /// The value of `field`, or `None` when this entry kind has no such field.
    fn field(&self, field: Field) -> Option<Decimal>;
}

impl LabeledEntry for SavingsTypeEntry {
    fn label(&self) -> &str {
        &self.label
    }

    fn field(&self, field: Field) -> Option<Decimal> {
        match field {
            Field::Amount => Some(self.amount),
            Field::BalanceBroughtForward => Some(self.balance_brought_forward),
            Field::BalanceCarriedForward => Some(self.balance_carried_forward),
            _ => None,
        }
    }
}

impl LabeledEntry for LoanTypeEntry {
    fn label(&self) -> &str {
        &self.loan_type
    }

    fn field(&self, field: Field) -> Option<Decimal> {
        match field {
            Field::BalanceBroughtForward => Some(self.balance_brought_forward),
            Field::TotalAmountOutstanding => Some(self.total_amount_outstanding),
            _ => None,
        }
    }
}

impl LabeledEntry for VentureTypeEntry {
    fn label(&self) -> &str {
        &self.venture_type
    }

    fn field(&self, field: Field) -> Option<Decimal> {
        match field {
            Field::BalanceBroughtForward => Some(self.balance_brought_forward),
            Field::BalanceCarriedForward => Some(self.balance_carried_forward),
            Field::TotalVentureDeposits => Some(self.total_venture_deposits),
            Field::TotalVenturePayments => Some(self.total_venture_payments),
            _ => None,
        }
    }
}
