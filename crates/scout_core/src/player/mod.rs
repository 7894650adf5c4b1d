//! Derived player columns: position and youth eligibility.

pub mod classifier;
pub mod eligibility;

pub use classifier::{classify, classify_all, scout, Classification};
pub use eligibility::{is_youth_eligible, youth_cap};
