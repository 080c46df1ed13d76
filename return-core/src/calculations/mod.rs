//! Calculation modules for the Form 1040 pipeline.
//!
//! `schedules` holds the per-schedule calculators (C, SE, D, E, B, 3),
//! `worksheets` the multi-step worksheets (Social Security benefits, QBI,
//! Schedule 8812), and `form1040` the orchestrator that sequences them into
//! a complete return. `bracket_tax` resolves the marginal tax for line 16.

pub mod bracket_tax;
pub mod common;
pub mod form1040;
pub mod schedules;
pub mod worksheets;

pub use bracket_tax::{BracketResolver, BracketSource, BracketTax};
pub use form1040::{Form1040, Form1040Worksheet, ReturnMeta, compute_return};
