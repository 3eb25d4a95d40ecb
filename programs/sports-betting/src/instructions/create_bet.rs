use crate::{constants::*, error::SportsBettingError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

#[derive(Accounts)]
#[instruction(match_id: u64)]
pub struct CreateBet<'info> {
    #[account(mut)]
    pub bettor: Signer<'info>,

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

    #[account(
        init_if_needed,
        payer = bettor,
        space = DISCRIMINATOR_SIZE + UserBalance::INIT_SPACE,
        seeds = [BALANCE_SEED.as_bytes(), bettor.key().as_ref()],
        bump
    )]
    pub user_balance: Account<'info, UserBalance>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateBet<'info> {
    pub fn load_match(&self) -> Result<SportsMatch> {
        read_account(&self.sports_match.to_account_info())
            .ok_or_else(|| SportsBettingError::MatchNotFound.into())
    }

    pub fn spendable_pool(&self) -> Result<u64> {
        let ledger_info = self.ledger.to_account_info();
        let rent_exempt_minimum = Rent::get()?.minimum_balance(ledger_info.data_len());
        Ok(spendable_lamports(ledger_info.lamports(), rent_exempt_minimum))
    }

    pub fn validate(&self, sports_match: &SportsMatch, match_id: u64, amount: u64) -> Result<()> {
        require!(
            self.ledger.is_active(match_id),
            SportsBettingError::MatchNotFound
        );

        sports_match.can_accept_bet(&self.bettor.key(), amount)?;

        // the stake joins the pool, the pool must still cover the reward
        let spendable = self
            .spendable_pool()?
            .checked_add(amount)
            .ok_or(SportsBettingError::Overflow)?;
        self.ledger.can_reserve(BET_REWARD, spendable)?;

        Ok(())
    }
}

pub fn handler(
    ctx: Context<CreateBet>,
    match_id: u64,
    prediction: WinnerSelection,
    amount: u64,
) -> Result<()> {
    let mut sports_match = ctx.accounts.load_match()?;

    // validate
    ctx.accounts.validate(&sports_match, match_id, amount)?;

    // transfer stake from bettor to the ledger pool
    let transfer_accounts = Transfer {
        from: ctx.accounts.bettor.to_account_info(),
        to: ctx.accounts.ledger.to_account_info(),
    };
    let transfer_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        transfer_accounts,
    );
    transfer(transfer_ctx, amount)?;

    let bettor = ctx.accounts.bettor.key();
    let spendable = ctx.accounts.spendable_pool()?;

    ctx.accounts
        .user_balance
        .ensure_owner(bettor, ctx.bumps.user_balance)?;

    sports_match.place_bet(bettor, prediction, amount)?;
    write_account(&ctx.accounts.sports_match.to_account_info(), &sports_match)?;

    let ledger = &mut ctx.accounts.ledger;
    ledger.reserve_payouts(BET_REWARD, spendable)?;
    ledger.record_bet()?;

    msg!("Bet placed on match {} by {}", match_id, bettor);
    emit!(BetCreated {
        match_id,
        bettor,
        prediction,
        stake: amount,
    });

    Ok(())
}
