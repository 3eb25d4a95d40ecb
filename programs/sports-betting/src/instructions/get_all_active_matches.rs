use crate::{constants::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct GetAllActiveMatches<'info> {
    #[account(
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,
}

pub fn handler(ctx: Context<GetAllActiveMatches>) -> Result<Vec<MatchInfo>> {
    Ok(ctx.accounts.ledger.active_matches.clone())
}
