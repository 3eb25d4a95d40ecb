use anchor_lang::prelude::*;

#[event]
pub struct UserWithdrew {
    pub user: Pubkey,
    pub amount: u64,
    pub remaining_balance: u64,
}
