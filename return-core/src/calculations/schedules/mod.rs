//! Per-schedule calculators: C, SE, D, E, B, and 3.
//!
//! Each module takes the facts it needs and returns a result struct; none
//! of them read sibling results or hold state between calls. The Form 1040
//! orchestrator owns the sequencing.

pub mod schedule_b;
pub mod schedule_c;
pub mod schedule_d;
pub mod schedule_e;
pub mod schedule_se;
pub mod schedule_three;

pub use schedule_b::ScheduleBResult;
pub use schedule_c::ScheduleCResult;
pub use schedule_d::{BoxTotals, ScheduleDResult};
pub use schedule_e::ScheduleEResult;
pub use schedule_se::{SeResult, SeSchedule, SeSummary};
pub use schedule_three::ScheduleThreeResult;
