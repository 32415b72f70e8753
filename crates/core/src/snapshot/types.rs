//! Raw snapshot data types.
//!
//! These mirror the server-supplied JSON. Every field is parsed leniently:
//! numbers degrade to zero, labels to text, and lists or sections that are
//! absent, `null` or of the wrong shape to empty.

use coop_shared::types::money::de::{
    lenient_decimal, lenient_optional_decimal, lenient_optional_string, lenient_optional_struct,
    lenient_optional_year, lenient_seq, lenient_string, lenient_struct,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A full statement snapshot for one member (or the cooperative) and year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementSnapshot {
    /// Reporting year.
    #[serde(default, deserialize_with = "lenient_optional_year")]
    pub year: Option<i32>,
    /// Member identity, when the snapshot carries one.
    #[serde(default, deserialize_with = "lenient_optional_struct")]
    pub member: Option<MemberIdentity>,
    /// Monthly records in chronological order.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub monthly_summary: Vec<RawMonthSnapshot>,
    /// Cooperative-wide totals.
    #[serde(default, deserialize_with = "lenient_optional_struct")]
    pub chart_of_accounts: Option<ChartOfAccounts>,
}

/// Member identity fields. Used for rendering only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberIdentity {
    /// Membership number.
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub member_no: Option<String>,
    /// First name.
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub last_name: Option<String>,
}

impl MemberIdentity {
    /// Full display name, or `None` when neither name part is present.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// One month's raw record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMonthSnapshot {
    /// Month label, e.g. "Jan 2024".
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub month: Option<String>,
    /// Savings section.
    #[serde(default, deserialize_with = "lenient_struct")]
    pub savings: SavingsSection,
    /// Loans section.
    #[serde(default, deserialize_with = "lenient_struct")]
    pub loans: LoansSection,
    /// Ventures section.
    #[serde(default, deserialize_with = "lenient_struct")]
    pub ventures: VenturesSection,
    /// Guarantees section.
    #[serde(default, deserialize_with = "lenient_struct")]
    pub guarantees: GuaranteeSection,
}

/// Savings entries for a month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsSection {
    /// Entries per savings type.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub by_type: Vec<SavingsTypeEntry>,
}

/// Loan entries for a month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoansSection {
    /// Entries per loan type.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub by_type: Vec<LoanTypeEntry>,
}

/// Venture entries for a month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenturesSection {
    /// Entries per venture type.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub by_type: Vec<VentureTypeEntry>,
}

/// A line item inside an entry (deposit, payment, disbursement, repayment).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Line amount.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub amount: Decimal,
}

/// Savings activity for one type in one month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsTypeEntry {
    /// Savings type label.
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub label: String,
    /// Period deposit total.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub amount: Decimal,
    /// Opening balance.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub balance_brought_forward: Decimal,
    /// Closing balance as reported by the producer.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub balance_carried_forward: Decimal,
    /// Deposit line items.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub deposits: Vec<LineItem>,
}

/// Loan activity for one type in one month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanTypeEntry {
    /// Loan type label.
    #[serde(default, deserialize_with = "lenient_string")]
    pub loan_type: String,
    /// Disbursement line items.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub total_amount_disbursed: Vec<LineItem>,
    /// Repayment line items.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub total_amount_repaid: Vec<LineItem>,
    /// Interest charge line items.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub total_interest_charged: Vec<LineItem>,
    /// Outstanding amount as reported by the producer.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_amount_outstanding: Decimal,
    /// Opening balance.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub balance_brought_forward: Decimal,
}

/// Venture activity for one type in one month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VentureTypeEntry {
    /// Venture type label.
    #[serde(default, deserialize_with = "lenient_string")]
    pub venture_type: String,
    /// Deposit line items.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub venture_deposits: Vec<LineItem>,
    /// Payment line items.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub venture_payments: Vec<LineItem>,
    /// Pre-summed deposits (condensed view only).
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_venture_deposits: Decimal,
    /// Pre-summed payments (condensed view only).
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_venture_payments: Decimal,
    /// Opening balance.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub balance_brought_forward: Decimal,
    /// Closing balance as reported by the producer.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub balance_carried_forward: Decimal,
}

/// Guarantees for a month: scalars, a transaction list, or both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuaranteeSection {
    /// Active guaranteed balance.
    #[serde(default, deserialize_with = "lenient_optional_decimal")]
    pub active_balance: Option<Decimal>,
    /// Guarantees issued in the month.
    #[serde(default, deserialize_with = "lenient_optional_decimal")]
    pub new_guarantees: Option<Decimal>,
    /// Individual guarantee balances.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub transactions: Vec<GuaranteeTransaction>,
}

/// A single guarantee's current balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuaranteeTransaction {
    /// Current guaranteed balance.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub current_balance: Decimal,
}

/// Cooperative-wide totals supplied alongside the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOfAccounts {
    /// Total savings.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_savings: Decimal,
    /// Total loans.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_loans: Decimal,
    /// Total ventures.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_ventures: Decimal,
    /// Total savings deposits.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_savings_deposits: Decimal,
    /// Savings totals per type.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub total_savings_by_type: Vec<SavingsTypeTotal>,
    /// Outstanding loan totals per type.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub total_loans_by_type: Vec<LoanTypeTotal>,
}

/// Savings total for one type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsTypeTotal {
    /// Savings type label.
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub label: String,
    /// Total amount.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub amount: Decimal,
}

/// Outstanding total for one loan type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanTypeTotal {
    /// Loan type label.
    #[serde(default, deserialize_with = "lenient_string")]
    pub loan_type: String,
    /// Total outstanding amount.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_outstanding_amount: Decimal,
}
