use crate::{constants::*, error::SportsBettingError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(match_id: u64)]
pub struct FinishMatch<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: may not exist for an unknown id, loaded with `read_account`
    #[account(
        mut,
        seeds = [MATCH_SEED.as_bytes(), &match_id.to_le_bytes()],
        bump
    )]
    pub sports_match: UncheckedAccount<'info>,
}

impl<'info> FinishMatch<'info> {
    pub fn validate(&self, sports_match: &SportsMatch, match_id: u64) -> Result<()> {
        require_keys_eq!(
            self.signer.key(),
            self.ledger.admin,
            SportsBettingError::Unauthorized
        );

        require!(
            self.ledger.is_active(match_id),
            SportsBettingError::MatchNotFound
        );

        require!(
            sports_match.status == MatchStatus::Active,
            SportsBettingError::MatchNotFound
        );

        Ok(())
    }
}

/// Remaining accounts: the `UserBalance` PDA of every winning bettor, writable.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, FinishMatch<'info>>,
    match_id: u64,
    winner: WinnerSelection,
) -> Result<()> {
    let match_info = ctx.accounts.sports_match.to_account_info();
    let mut sports_match: SportsMatch =
        read_account(&match_info).ok_or(SportsBettingError::MatchNotFound)?;

    // validate
    ctx.accounts.validate(&sports_match, match_id)?;

    let payouts = sports_match.payouts_for(winner)?;
    let total = total_payout(&payouts)?;
    let reserved = sports_match.reserved_payouts()?;

    // Load balance accounts for every winner before touching any state
    let mut provided: Vec<(&AccountInfo<'info>, UserBalance)> = Vec::new();
    for acc_info in ctx.remaining_accounts.iter() {
        require!(
            acc_info.is_writable,
            SportsBettingError::InvalidBalanceAccount
        );
        let balance: UserBalance =
            read_account(acc_info).ok_or(SportsBettingError::InvalidBalanceAccount)?;
        provided.push((acc_info, balance));
    }

    let mut winners = Vec::with_capacity(payouts.len());
    for payout in payouts.iter() {
        let index = provided
            .iter()
            .position(|(_, b)| b.owner == payout.bettor)
            .ok_or(SportsBettingError::BalanceAccountMissing)?;
        winners.push((provided.swap_remove(index), payout.amount));
    }

    // every bet reserved BET_REWARD when it was placed, keep what winners earned
    ctx.accounts.ledger.settle_reservations(reserved, total)?;

    for ((acc_info, balance), amount) in winners.iter_mut() {
        balance.credit(*amount)?;
        write_account(*acc_info, &*balance)?;
    }

    let now = Clock::get()?.unix_timestamp;
    sports_match.finish(winner, now)?;
    write_account(&match_info, &sports_match)?;
    ctx.accounts.ledger.remove_match(match_id)?;

    msg!(
        "Match {} finished, {} winners paid {} lamports",
        match_id,
        winners.len(),
        total
    );
    emit!(MatchFinished {
        match_id,
        winner,
        winning_bettors: winners.len() as u32,
        total_payout: total,
        finished_at: now,
    });

    Ok(())
}
