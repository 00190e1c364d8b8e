#![no_std]

pub mod access;
pub mod checks;
pub mod contest;
pub mod distribution;
pub mod errors;
pub mod event;
pub mod ledger;
pub mod payout;
pub mod registry;
pub mod scheduler;
pub mod traits;
pub mod types;
