use crate::constants::WinnerSelection;
use anchor_lang::prelude::*;

#[event]
pub struct MatchFinished {
    pub match_id: u64,
    pub winner: WinnerSelection,
    pub winning_bettors: u32,
    pub total_payout: u64,
    pub finished_at: i64,
}
