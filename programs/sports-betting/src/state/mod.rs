pub mod ledger;
pub mod sports_match;
pub mod user_balance;

pub use ledger::*;
pub use sports_match::*;
pub use user_balance::*;
