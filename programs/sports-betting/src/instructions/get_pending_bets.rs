use crate::{constants::*, error::SportsBettingError, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(match_id: u64)]
pub struct GetPendingBets<'info> {
    /// CHECK: may not exist for an unknown id, loaded with `read_account`
    #[account(
        seeds = [MATCH_SEED.as_bytes(), &match_id.to_le_bytes()],
        bump
    )]
    pub sports_match: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<GetPendingBets>, _match_id: u64) -> Result<Vec<PendingBet>> {
    let sports_match: SportsMatch = read_account(&ctx.accounts.sports_match.to_account_info())
        .ok_or(SportsBettingError::MatchNotFound)?;
    Ok(sports_match.pending_bets)
}
