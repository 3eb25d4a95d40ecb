pub mod bet_created;
pub mod ledger_initialized;
pub mod match_created;
pub mod match_finished;
pub mod user_withdrew;

pub use bet_created::*;
pub use ledger_initialized::*;
pub use match_created::*;
pub use match_finished::*;
pub use user_withdrew::*;
