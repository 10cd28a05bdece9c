//! Shared test utilities

#![allow(dead_code)]

mod checkout;
mod logs;

pub use checkout::{TestCheckout, git_available};
pub use logs::{CapturedLogs, StubFinder};
