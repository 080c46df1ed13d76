pub mod calculations;
pub mod models;

pub use calculations::form1040::{Form1040, Form1040Worksheet, ReturnMeta, compute_return};
pub use models::*;
