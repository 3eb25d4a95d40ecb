#![allow(unexpected_cfgs)]
#![allow(deprecated)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("8tW1DU4mVKKEwvxyCAmx9xg98W8AMdnQA91zAtir9kDa");

#[program]
pub mod sports_betting {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::handler(ctx)
    }

    pub fn create_match(ctx: Context<CreateMatch>, new_match: MatchInfo) -> Result<()> {
        create_match::handler(ctx, new_match)
    }

    pub fn create_bet(
        ctx: Context<CreateBet>,
        match_id: u64,
        prediction: WinnerSelection,
        amount: u64,
    ) -> Result<()> {
        create_bet::handler(ctx, match_id, prediction, amount)
    }

    pub fn finish_match<'info>(
        ctx: Context<'_, '_, 'info, 'info, FinishMatch<'info>>,
        match_id: u64,
        winner: WinnerSelection,
    ) -> Result<()> {
        finish_match::handler(ctx, match_id, winner)
    }

    pub fn get_all_active_matches(ctx: Context<GetAllActiveMatches>) -> Result<Vec<MatchInfo>> {
        get_all_active_matches::handler(ctx)
    }

    pub fn get_active_match(ctx: Context<GetActiveMatch>, index: u64) -> Result<MatchInfo> {
        get_active_match::handler(ctx, index)
    }

    pub fn get_pending_bets(ctx: Context<GetPendingBets>, match_id: u64) -> Result<Vec<PendingBet>> {
        get_pending_bets::handler(ctx, match_id)
    }

    pub fn get_balance(ctx: Context<GetBalance>, owner: Pubkey) -> Result<u64> {
        get_balance::handler(ctx, owner)
    }

    pub fn user_withdraw(ctx: Context<UserWithdraw>, amount: u64) -> Result<()> {
        user_withdraw::handler(ctx, amount)
    }
}
