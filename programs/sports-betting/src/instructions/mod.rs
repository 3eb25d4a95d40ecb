#![allow(ambiguous_glob_reexports)]

pub mod create_bet;
pub mod create_match;
pub mod finish_match;
pub mod get_active_match;
pub mod get_all_active_matches;
pub mod get_balance;
pub mod get_pending_bets;
pub mod initialize;
pub mod user_withdraw;

pub use create_bet::*;
pub use create_match::*;
pub use finish_match::*;
pub use get_active_match::*;
pub use get_all_active_matches::*;
pub use get_balance::*;
pub use get_pending_bets::*;
pub use initialize::*;
pub use user_withdraw::*;
