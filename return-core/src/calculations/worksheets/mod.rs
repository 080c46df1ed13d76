//! Multi-step worksheets that sit between the schedules and the Form 1040
//! line map: taxable Social Security benefits, the simplified QBI
//! deduction, and Schedule 8812.

pub mod child_credit;
pub mod qbi_deduction;
pub mod social_security;

pub use child_credit::{ChildCreditInput, ChildCreditResult};
pub use qbi_deduction::QbiResult;
pub use social_security::BenefitsResult;
