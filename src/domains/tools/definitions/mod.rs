//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod benefits;
pub mod card_dashboard;
pub mod identification;
pub mod open_ui;
pub mod range_earnings;

pub use benefits::{BenefitsMessageTool, BenefitsParams};
pub use card_dashboard::{OpenCardDashboardParams, OpenCardDashboardTool};
pub use identification::{IdentificationMessageTool, IdentificationParams};
pub use open_ui::{OpenUiParams, OpenUiTool};
pub use range_earnings::{RangeEarningsMessageTool, RangeEarningsParams};
