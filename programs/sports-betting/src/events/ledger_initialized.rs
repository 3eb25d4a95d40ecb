use anchor_lang::prelude::*;

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub initial_pool: u64,
}
