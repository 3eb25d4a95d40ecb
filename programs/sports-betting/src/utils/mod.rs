pub mod accounts;
pub mod lamports;
pub mod payout;

pub use accounts::*;
pub use lamports::*;
pub use payout::*;
