use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const LEDGER_SEED: &str = "ledger";
#[constant]
pub const MATCH_SEED: &str = "match";
#[constant]
pub const BALANCE_SEED: &str = "balance";

/// Anchor account discriminator
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Stake every bet must attach (0.1 SOL)
#[constant]
pub const BET_COST: u64 = 100_000_000;

/// Credited per winning bet (0.2 SOL)
#[constant]
pub const BET_REWARD: u64 = 200_000_000;

/// Pool deposited into the ledger on initialize (1 SOL)
#[constant]
pub const INITIAL_POOL: u64 = 1_000_000_000;

/// Capacity limits, keep in sync with the `max_len` attributes in `state`
pub const MAX_ACTIVE_MATCHES: usize = 32;
pub const MAX_PENDING_BETS: usize = 64;
pub const MAX_TEAM_NAME_LEN: usize = 32;

/// Distinct bettors per match. `finish_match` takes one writable balance
/// account per winner, and a legacy transaction (1232 bytes) fits about
/// 29 of them next to the fixed accounts.
pub const MAX_BETTORS_PER_MATCH: usize = 24;

/// Outcome a bet predicts and a finished match records
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum WinnerSelection {
    Draw,
    TeamA,
    TeamB,
}

/// Lifecycle of a match account
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum MatchStatus {
    #[default]
    Vacant,   // Account allocated, id never used
    Active,   // Open for bets
    Finished, // Resolved, id retired
}
