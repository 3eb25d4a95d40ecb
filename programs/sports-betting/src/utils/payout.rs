use crate::{constants::*, error::SportsBettingError, state::PendingBet};
use anchor_lang::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub bettor: Pubkey,
    pub amount: u64,
}

pub fn is_bet_winner(prediction: WinnerSelection, winner: WinnerSelection) -> bool {
    prediction == winner
}

/// Walks `bets` in placement order and credits `BET_REWARD` for every
/// correct prediction. A bettor with several winning bets gets one entry,
/// positioned at their first winning bet.
pub fn compute_payouts(bets: &[PendingBet], winner: WinnerSelection) -> Result<Vec<Payout>> {
    let mut payouts: Vec<Payout> = Vec::new();

    for bet in bets.iter().filter(|b| is_bet_winner(b.prediction, winner)) {
        match payouts.iter_mut().find(|p| p.bettor == bet.bettor) {
            Some(payout) => {
                payout.amount = payout
                    .amount
                    .checked_add(BET_REWARD)
                    .ok_or(SportsBettingError::Overflow)?;
            }
            None => payouts.push(Payout {
                bettor: bet.bettor,
                amount: BET_REWARD,
            }),
        }
    }

    Ok(payouts)
}

pub fn total_payout(payouts: &[Payout]) -> Result<u64> {
    let mut total = 0u64;
    for payout in payouts {
        total = total
            .checked_add(payout.amount)
            .ok_or(SportsBettingError::Overflow)?;
    }
    Ok(total)
}
