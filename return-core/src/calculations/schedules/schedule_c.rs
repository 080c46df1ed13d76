//! Schedule C business net profit or loss.
//!
//! Each business activity nets gross receipts against total expenses; the
//! results accumulate per owner so Schedule SE can run separately for the
//! taxpayer and the spouse. No at-risk or passive-activity loss limitation
//! applies at this level.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BusinessEntry, Owner};

/// Per-owner and combined Schedule C totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCResult {
    /// Net profit or loss for the primary taxpayer's activities.
    pub taxpayer_net: Decimal,

    /// Net profit or loss for the spouse's activities.
    pub spouse_net: Decimal,

    /// Combined net across all activities; feeds Schedule 1 line 3.
    pub combined_net: Decimal,
}

impl ScheduleCResult {
    pub fn net_for(&self, owner: Owner) -> Decimal {
        match owner {
            Owner::Taxpayer => self.taxpayer_net,
            Owner::Spouse => self.spouse_net,
        }
    }
}

/// Nets every business activity, partitioned by owner.
pub fn calculate(businesses: &[BusinessEntry]) -> ScheduleCResult {
    let mut result = ScheduleCResult::default();

    for business in businesses {
        let net = business.gross_receipts - business.total_expenses;
        match business.owner {
            Owner::Taxpayer => result.taxpayer_net += net,
            Owner::Spouse => result.spouse_net += net,
        }
    }

    result.combined_net = result.taxpayer_net + result.spouse_net;
    result
}
