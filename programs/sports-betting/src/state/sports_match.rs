use crate::{constants::*, error::SportsBettingError, state::MatchInfo, utils::*};
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct PendingBet {
    pub bettor: Pubkey,              // The address that placed the bet.
    pub prediction: WinnerSelection, // The predicted outcome.
    pub stake: u64,                  // Lamports attached to the bet.
}

#[account]
#[derive(InitSpace, Default)]
pub struct SportsMatch {
    // --- Identity ---
    pub id: u64, // Externally assigned match id, also the PDA seed.
    #[max_len(32)]
    pub team_a: String,
    #[max_len(32)]
    pub team_b: String,

    // --- State ---
    pub status: MatchStatus,             // Vacant, Active or Finished.
    pub winner: Option<WinnerSelection>, // Set once the match is finished.
    #[max_len(64)]
    pub pending_bets: Vec<PendingBet>, // Bets in placement order.

    // --- Metadata ---
    pub created_at: i64,          // The timestamp when the match was opened.
    pub finished_at: Option<i64>, // The timestamp when the match was finished.
    pub bump: u8,                 // A bump seed for PDA.
}

impl SportsMatch {
    pub fn info(&self) -> MatchInfo {
        MatchInfo {
            id: self.id,
            team_a: self.team_a.clone(),
            team_b: self.team_b.clone(),
        }
    }

    pub fn can_open(&self, info: &MatchInfo) -> Result<()> {
        // finished accounts stay around, so a used id can never be opened again
        require!(
            self.status == MatchStatus::Vacant,
            SportsBettingError::MatchAlreadyExists
        );
        info.validate_names()
    }

    pub fn open(&mut self, info: MatchInfo, now: i64, bump: u8) -> Result<()> {
        self.can_open(&info)?;

        self.id = info.id;
        self.team_a = info.team_a;
        self.team_b = info.team_b;
        self.status = MatchStatus::Active;
        self.winner = None;
        self.pending_bets = Vec::new();
        self.created_at = now;
        self.finished_at = None;
        self.bump = bump;

        Ok(())
    }

    pub fn has_bettor(&self, bettor: &Pubkey) -> bool {
        self.pending_bets.iter().any(|b| b.bettor == *bettor)
    }

    pub fn distinct_bettors(&self) -> usize {
        self.pending_bets
            .iter()
            .enumerate()
            .filter(|(i, b)| !self.pending_bets[..*i].iter().any(|p| p.bettor == b.bettor))
            .count()
    }

    pub fn can_accept_bet(&self, bettor: &Pubkey, stake: u64) -> Result<()> {
        require!(
            self.status == MatchStatus::Active,
            SportsBettingError::MatchNotFound
        );
        require!(stake == BET_COST, SportsBettingError::InvalidStake);
        require!(
            self.pending_bets.len() < MAX_PENDING_BETS,
            SportsBettingError::PendingBetLimitReached
        );
        require!(
            self.has_bettor(bettor) || self.distinct_bettors() < MAX_BETTORS_PER_MATCH,
            SportsBettingError::BettorLimitReached
        );
        Ok(())
    }

    pub fn place_bet(&mut self, bettor: Pubkey, prediction: WinnerSelection, stake: u64) -> Result<()> {
        self.can_accept_bet(&bettor, stake)?;
        self.pending_bets.push(PendingBet {
            bettor,
            prediction,
            stake,
        });
        Ok(())
    }

    /// Lamports reserved in the ledger for this match's bets.
    pub fn reserved_payouts(&self) -> Result<u64> {
        (self.pending_bets.len() as u64)
            .checked_mul(BET_REWARD)
            .ok_or_else(|| SportsBettingError::Overflow.into())
    }

    /// Payouts owed if the match finished with `winner`. Does not change state.
    pub fn payouts_for(&self, winner: WinnerSelection) -> Result<Vec<Payout>> {
        require!(
            self.status == MatchStatus::Active,
            SportsBettingError::MatchNotFound
        );
        compute_payouts(&self.pending_bets, winner)
    }

    pub fn finish(&mut self, winner: WinnerSelection, now: i64) -> Result<()> {
        require!(
            self.status == MatchStatus::Active,
            SportsBettingError::MatchNotFound
        );
        self.status = MatchStatus::Finished;
        self.winner = Some(winner);
        self.finished_at = Some(now);
        Ok(())
    }
}
