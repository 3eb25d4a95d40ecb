use anchor_lang::prelude::*;

#[event]
pub struct MatchCreated {
    pub match_id: u64,
    pub team_a: String,
    pub team_b: String,
    pub created_at: i64,
}
