use crate::{constants::*, error::SportsBettingError};
use anchor_lang::prelude::*;

/// Public view of a match, as stored in the active set.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct MatchInfo {
    pub id: u64,
    #[max_len(32)]
    pub team_a: String,
    #[max_len(32)]
    pub team_b: String,
}

impl MatchInfo {
    pub fn new(id: u64, team_a: &str, team_b: &str) -> Self {
        Self {
            id,
            team_a: team_a.to_string(),
            team_b: team_b.to_string(),
        }
    }

    pub fn validate_names(&self) -> Result<()> {
        require!(
            self.team_a.len() <= MAX_TEAM_NAME_LEN && self.team_b.len() <= MAX_TEAM_NAME_LEN,
            SportsBettingError::TeamNameTooLong
        );
        Ok(())
    }
}

#[account]
#[derive(InitSpace, Default)]
pub struct Ledger {
    // --- Authorities ---
    pub admin: Pubkey, // Creates and finishes matches.

    // --- Matches ---
    #[max_len(32)]
    pub active_matches: Vec<MatchInfo>, // Open matches in creation order.

    // --- Aggregates ---
    pub total_matches: u64,     // Matches ever created.
    pub total_bets: u64,        // Bets ever placed.
    pub committed_payouts: u64, // Unwithdrawn balances plus BET_REWARD per pending bet.

    // --- Metadata ---
    pub bump: u8, // A bump seed for PDA.
}

impl Ledger {
    pub fn is_active(&self, id: u64) -> bool {
        self.active_matches.iter().any(|m| m.id == id)
    }

    pub fn can_register(&self, id: u64) -> Result<()> {
        require!(!self.is_active(id), SportsBettingError::MatchAlreadyExists);
        require!(
            self.active_matches.len() < MAX_ACTIVE_MATCHES,
            SportsBettingError::ActiveMatchLimitReached
        );
        Ok(())
    }

    pub fn register_match(&mut self, info: MatchInfo) -> Result<()> {
        self.can_register(info.id)?;
        self.active_matches.push(info);
        self.total_matches = self
            .total_matches
            .checked_add(1)
            .ok_or(SportsBettingError::Overflow)?;
        Ok(())
    }

    /// Removes a match from the active set, keeping the order of the rest.
    pub fn remove_match(&mut self, id: u64) -> Result<MatchInfo> {
        let index = self
            .active_matches
            .iter()
            .position(|m| m.id == id)
            .ok_or(SportsBettingError::MatchNotFound)?;
        Ok(self.active_matches.remove(index))
    }

    pub fn active_match(&self, index: u64) -> Result<MatchInfo> {
        let index = usize::try_from(index).map_err(|_| SportsBettingError::MatchNotFound)?;
        self.active_matches
            .get(index)
            .cloned()
            .ok_or_else(|| SportsBettingError::MatchNotFound.into())
    }

    pub fn record_bet(&mut self) -> Result<()> {
        self.total_bets = self
            .total_bets
            .checked_add(1)
            .ok_or(SportsBettingError::Overflow)?;
        Ok(())
    }

    pub fn can_reserve(&self, amount: u64, spendable: u64) -> Result<u64> {
        let committed = self
            .committed_payouts
            .checked_add(amount)
            .ok_or(SportsBettingError::Overflow)?;
        require!(
            committed <= spendable,
            SportsBettingError::InsufficientPoolFunds
        );
        Ok(committed)
    }

    /// Sets aside `amount` for a payout that may become owed, as long as
    /// `spendable` lamports still cover everything committed.
    pub fn reserve_payouts(&mut self, amount: u64, spendable: u64) -> Result<()> {
        self.committed_payouts = self.can_reserve(amount, spendable)?;
        Ok(())
    }

    /// Drops `amount` from the commitments: a withdrawal or a losing bet.
    pub fn release_payout(&mut self, amount: u64) -> Result<()> {
        self.committed_payouts = self
            .committed_payouts
            .checked_sub(amount)
            .ok_or(SportsBettingError::Underflow)?;
        Ok(())
    }

    /// Settles a finished match: `reserved` was set aside for its bets and
    /// `paid` of it was credited to winners. The rest is released.
    pub fn settle_reservations(&mut self, reserved: u64, paid: u64) -> Result<()> {
        let unused = reserved
            .checked_sub(paid)
            .ok_or(SportsBettingError::Underflow)?;
        self.release_payout(unused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn ledger() -> Ledger {
        Ledger {
            admin: Pubkey::new_unique(),
            ..Default::default()
        }
    }

    #[test]
    fn test_register_match_appears_in_active_set() {
        let mut ledger = ledger();
        ledger
            .register_match(MatchInfo::new(100, "Croatia", "Brazil"))
            .unwrap();

        assert_eq!(
            ledger.active_matches,
            vec![MatchInfo::new(100, "Croatia", "Brazil")]
        );
        assert_eq!(ledger.active_match(0).unwrap().team_a, "Croatia");
        assert_eq!(ledger.total_matches, 1);
    }

    #[test]
    fn test_register_duplicate_id_rejected() {
        let mut ledger = ledger();
        ledger
            .register_match(MatchInfo::new(100, "Croatia", "Brazil"))
            .unwrap();

        let err = ledger
            .register_match(MatchInfo::new(100, "France", "USA"))
            .unwrap_err();
        assert_eq!(err, Error::from(SportsBettingError::MatchAlreadyExists));
        assert_eq!(ledger.active_matches.len(), 1);
        assert_eq!(ledger.active_matches[0].team_a, "Croatia");
    }

    #[test]
    fn test_register_respects_capacity() {
        let mut ledger = ledger();
        for id in 0..MAX_ACTIVE_MATCHES as u64 {
            ledger.register_match(MatchInfo::new(id, "A", "B")).unwrap();
        }

        let err = ledger
            .register_match(MatchInfo::new(1_000, "A", "B"))
            .unwrap_err();
        assert_eq!(err, Error::from(SportsBettingError::ActiveMatchLimitReached));
    }

    #[test]
    fn test_remove_match_keeps_creation_order() {
        let mut ledger = ledger();
        for id in [1, 2, 3] {
            ledger.register_match(MatchInfo::new(id, "A", "B")).unwrap();
        }

        let removed = ledger.remove_match(2).unwrap();
        assert_eq!(removed.id, 2);
        let ids: Vec<u64> = ledger.active_matches.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let err = ledger.remove_match(2).unwrap_err();
        assert_eq!(err, Error::from(SportsBettingError::MatchNotFound));
    }

    #[test]
    fn test_active_match_out_of_range() {
        let ledger = ledger();
        let err = ledger.active_match(0).unwrap_err();
        assert_eq!(err, Error::from(SportsBettingError::MatchNotFound));
    }

    #[test]
    fn test_active_matches_read_is_idempotent() {
        let mut ledger = ledger();
        ledger.register_match(MatchInfo::new(7, "A", "B")).unwrap();

        let first = ledger.active_matches.clone();
        let second = ledger.active_matches.clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reserve_payouts_bounded_by_spendable() {
        let mut ledger = ledger();
        ledger.reserve_payouts(BET_REWARD, INITIAL_POOL).unwrap();
        assert_eq!(ledger.committed_payouts, BET_REWARD);

        let err = ledger
            .reserve_payouts(INITIAL_POOL, INITIAL_POOL)
            .unwrap_err();
        assert_eq!(err, Error::from(SportsBettingError::InsufficientPoolFunds));
        assert_eq!(ledger.committed_payouts, BET_REWARD);

        ledger.release_payout(BET_REWARD).unwrap();
        assert_eq!(ledger.committed_payouts, 0);
    }

    #[test]
    fn test_bet_beyond_pool_capacity_rejected_up_front() {
        // 1 SOL pool: every bet adds BET_COST and commits BET_REWARD
        let mut ledger = ledger();
        let mut spendable = INITIAL_POOL;
        let mut accepted = 0u64;
        loop {
            spendable += BET_COST;
            if ledger.reserve_payouts(BET_REWARD, spendable).is_err() {
                spendable -= BET_COST;
                break;
            }
            accepted += 1;
        }
        assert_eq!(accepted, 10);
        assert_eq!(ledger.committed_payouts, 10 * BET_REWARD);

        let err = ledger
            .can_reserve(BET_REWARD, spendable + BET_COST)
            .unwrap_err();
        assert_eq!(err, Error::from(SportsBettingError::InsufficientPoolFunds));

        // every bet wins: the reservations already cover the payout
        ledger
            .settle_reservations(10 * BET_REWARD, 10 * BET_REWARD)
            .unwrap();
        assert_eq!(ledger.committed_payouts, 10 * BET_REWARD);
        assert!(ledger.committed_payouts <= spendable);
    }

    #[test]
    fn test_settle_reservations_releases_losing_bets() {
        let mut ledger = ledger();
        ledger.reserve_payouts(3 * BET_REWARD, INITIAL_POOL).unwrap();

        ledger.settle_reservations(3 * BET_REWARD, BET_REWARD).unwrap();
        assert_eq!(ledger.committed_payouts, BET_REWARD);

        let err = ledger.settle_reservations(0, BET_REWARD).unwrap_err();
        assert_eq!(err, Error::from(SportsBettingError::Underflow));
    }

    #[test]
    fn test_long_team_name_rejected() {
        let info = MatchInfo::new(1, &"x".repeat(MAX_TEAM_NAME_LEN + 1), "B");
        let err = info.validate_names().unwrap_err();
        assert_eq!(err, Error::from(SportsBettingError::TeamNameTooLong));
    }
}
