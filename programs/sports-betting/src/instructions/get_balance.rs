use crate::{constants::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct GetBalance<'info> {
    /// CHECK: absent until the owner places a first bet
    #[account(
        seeds = [BALANCE_SEED.as_bytes(), owner.as_ref()],
        bump
    )]
    pub user_balance: UncheckedAccount<'info>,
}

/// Unknown addresses hold a zero balance.
pub fn handler(ctx: Context<GetBalance>, _owner: Pubkey) -> Result<u64> {
    let balance = read_account::<UserBalance>(&ctx.accounts.user_balance.to_account_info());
    Ok(balance.map(|b| b.amount).unwrap_or(0))
}
