use anchor_lang::prelude::*;

#[error_code]
pub enum SportsBettingError {
    // General Program Errors (0x1000 - 0x1999)
    #[msg("Unauthorized action for this account")]
    Unauthorized = 0x1000,

    #[msg("Arithmetic overflow")]
    Overflow = 0x1001,

    #[msg("Arithmetic underflow")]
    Underflow = 0x1002,

    // Match Errors (0x2000 - 0x2999)
    #[msg("Match already exists or fullfilled")]
    MatchAlreadyExists = 0x2000,

    #[msg("Match not found among active matches")]
    MatchNotFound = 0x2001,

    #[msg("Team name exceeds the maximum length")]
    TeamNameTooLong = 0x2002,

    #[msg("Active match limit reached")]
    ActiveMatchLimitReached = 0x2003,

    // Betting Errors (0x3000 - 0x3999)
    #[msg("Attached amount must equal the bet cost")]
    InvalidStake = 0x3000,

    #[msg("Pending bet limit reached for this match")]
    PendingBetLimitReached = 0x3001,

    #[msg("Distinct bettor limit reached for this match")]
    BettorLimitReached = 0x3002,

    // Settlement Errors (0x4000 - 0x4999)
    #[msg("Ledger pool cannot cover the payouts")]
    InsufficientPoolFunds = 0x4000,

    #[msg("Balance account for a winning bettor was not provided")]
    BalanceAccountMissing = 0x4001,

    #[msg("Invalid balance account")]
    InvalidBalanceAccount = 0x4002,

    // Withdrawal Errors (0x5000 - 0x5999)
    #[msg("Amount must be greater than 0")]
    InvalidAmount = 0x5000,

    #[msg("Insufficient balance for this withdrawal")]
    InsufficientBalance = 0x5001,

    #[msg("Transfer failed")]
    TransferFailed = 0x5002,
}
