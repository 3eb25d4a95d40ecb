use crate::{constants::*, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UserWithdraw<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    // seeds bind the balance to the signer
    #[account(
        mut,
        seeds = [BALANCE_SEED.as_bytes(), signer.key().as_ref()],
        bump = user_balance.bump
    )]
    pub user_balance: Account<'info, UserBalance>,
}

impl<'info> UserWithdraw<'info> {
    pub fn validate(&self, amount: u64) -> Result<()> {
        self.user_balance.can_debit(amount)?;

        let ledger_info = self.ledger.to_account_info();
        let rent_exempt_minimum = Rent::get()?.minimum_balance(ledger_info.data_len());
        ensure_withdrawable(ledger_info.lamports(), rent_exempt_minimum, amount)?;

        Ok(())
    }
}

pub fn handler(ctx: Context<UserWithdraw>, amount: u64) -> Result<()> {
    // validate
    ctx.accounts.validate(amount)?;

    let ledger = &mut ctx.accounts.ledger;
    let user_balance = &mut ctx.accounts.user_balance;

    user_balance.debit(amount)?;
    ledger.release_payout(amount)?;

    // transfer from the ledger pool to the signer
    transfer_from_program_account(
        &ledger.to_account_info(),
        &ctx.accounts.signer.to_account_info(),
        amount,
    )?;

    msg!("Withdrew {} lamports to {}", amount, user_balance.owner);
    emit!(UserWithdrew {
        user: user_balance.owner,
        amount,
        remaining_balance: user_balance.amount,
    });

    Ok(())
}
