//! Render result wrapper.

use serde::{Deserialize, Serialize};

use super::format::NO_DATA;

/// Either a rendered view or the explicit "no data" state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "view", rename_all = "snake_case")]
pub enum RenderOutcome<T> {
    /// The snapshot had no months.
    NoData {
        /// Message to show in place of the view.
        message: String,
    },
    /// A rendered view.
    Ready(T),
}

impl<T> RenderOutcome<T> {
    /// The "no data" state with the standard message.
    #[must_use]
    pub fn no_data() -> Self {
        Self::NoData {
            message: NO_DATA.to_string(),
        }
    }

    /// Returns true for the "no data" state.
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }

    /// The rendered view, if any.
    #[must_use]
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(view) => Some(view),
            Self::NoData { .. } => None,
        }
    }

    /// Borrows the rendered view, if any.
    #[must_use]
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Ready(view) => Some(view),
            Self::NoData { .. } => None,
        }
    }
}
