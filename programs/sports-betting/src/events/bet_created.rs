use crate::constants::WinnerSelection;
use anchor_lang::prelude::*;

#[event]
pub struct BetCreated {
    pub match_id: u64,
    pub bettor: Pubkey,
    pub prediction: WinnerSelection,
    pub stake: u64,
}
