//! Running balance ledger.
//!
//! One forward pass per section over the chronologically ordered months:
//! - savings: balance += period deposit
//! - ventures: balance += deposits - payments
//! - loans: balance += disbursed - repaid
//!
//! Every month's carried-forward balance is retained, not just the final one.

pub mod balance;
pub mod running;

pub use balance::RunningBalance;
pub use running::{BalanceTimeline, RunningBalanceLedger, RunningBalanceState};
