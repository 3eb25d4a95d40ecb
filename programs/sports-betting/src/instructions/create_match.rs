use crate::{constants::*, error::SportsBettingError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(new_match: MatchInfo)]
pub struct CreateMatch<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    // allocated on first use of an id and never closed
    #[account(
        init_if_needed,
        payer = signer,
        space = DISCRIMINATOR_SIZE + SportsMatch::INIT_SPACE,
        seeds = [MATCH_SEED.as_bytes(), &new_match.id.to_le_bytes()],
        bump
    )]
    pub sports_match: Account<'info, SportsMatch>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateMatch<'info> {
    pub fn validate(&self, new_match: &MatchInfo) -> Result<()> {
        require_keys_eq!(
            self.signer.key(),
            self.ledger.admin,
            SportsBettingError::Unauthorized
        );

        self.sports_match.can_open(new_match)?;
        self.ledger.can_register(new_match.id)?;

        Ok(())
    }
}

pub fn handler(ctx: Context<CreateMatch>, new_match: MatchInfo) -> Result<()> {
    // validate
    ctx.accounts.validate(&new_match)?;

    let now = Clock::get()?.unix_timestamp;
    let ledger = &mut ctx.accounts.ledger;
    let sports_match = &mut ctx.accounts.sports_match;

    sports_match.open(new_match.clone(), now, ctx.bumps.sports_match)?;
    ledger.register_match(new_match)?;

    msg!(
        "Match {} created: {} vs {}",
        sports_match.id,
        sports_match.team_a,
        sports_match.team_b
    );
    emit!(MatchCreated {
        match_id: sports_match.id,
        team_a: sports_match.team_a.clone(),
        team_b: sports_match.team_b.clone(),
        created_at: now,
    });

    Ok(())
}
