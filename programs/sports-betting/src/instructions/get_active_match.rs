use crate::{constants::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct GetActiveMatch<'info> {
    #[account(
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,
}

pub fn handler(ctx: Context<GetActiveMatch>, index: u64) -> Result<MatchInfo> {
    ctx.accounts.ledger.active_match(index)
}
