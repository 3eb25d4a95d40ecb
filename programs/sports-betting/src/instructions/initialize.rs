use crate::{constants::*, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Ledger::INIT_SPACE,
        seeds = [LEDGER_SEED.as_bytes()],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    // fund the betting pool
    let transfer_accounts = Transfer {
        from: ctx.accounts.signer.to_account_info(),
        to: ctx.accounts.ledger.to_account_info(),
    };
    let transfer_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        transfer_accounts,
    );
    transfer(transfer_ctx, INITIAL_POOL)?;

    let ledger = &mut ctx.accounts.ledger;

    // set fields
    ledger.admin = ctx.accounts.signer.key();
    ledger.active_matches = Vec::new();
    ledger.total_matches = 0;
    ledger.total_bets = 0;
    ledger.committed_payouts = 0;
    ledger.bump = ctx.bumps.ledger;

    msg!("Ledger initialized with pool of {} lamports", INITIAL_POOL);
    emit!(LedgerInitialized {
        admin: ledger.admin,
        initial_pool: INITIAL_POOL,
    });

    Ok(())
}
