//! Tabular renderers.
//!
//! Every renderer reads a built [`MonthlyAggregation`](crate::summary::MonthlyAggregation)
//! and never re-extracts amounts or recomputes balances. Missing numbers
//! render "0.00", missing labels "—", and an empty snapshot renders the
//! explicit "no data" state.

pub mod accordion;
pub mod detail;
pub mod format;
pub mod outcome;
pub mod statement;
pub mod yearly;

#[cfg(test)]
mod tests;

pub use accordion::{AccordionPanel, AccordionState, AccordionView, PanelGroup, accordion};
pub use detail::{DetailGrid, GridRow, HeaderGroup, condensed_grid, detail_grid};
pub use outcome::RenderOutcome;
pub use statement::{
    BankStatement, DeductionColumns, DepositColumns, LoanColumns, STATEMENT_WIDTH, StatementLine,
    bank_statement,
};
pub use yearly::{YearlyRollup, YearlyRow, YearlySection, yearly_rollup};
