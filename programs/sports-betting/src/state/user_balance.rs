use crate::error::SportsBettingError;
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default)]
pub struct UserBalance {
    pub owner: Pubkey,        // The address the balance belongs to.
    pub amount: u64,          // Withdrawable lamports.
    pub total_won: u64,       // Lamports ever credited.
    pub total_withdrawn: u64, // Lamports ever withdrawn.
    pub bump: u8,             // A bump seed for PDA.
}

impl UserBalance {
    /// Binds a freshly allocated balance account to its owner.
    pub fn ensure_owner(&mut self, owner: Pubkey, bump: u8) -> Result<()> {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.bump = bump;
        }
        require_keys_eq!(self.owner, owner, SportsBettingError::InvalidBalanceAccount);
        Ok(())
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(SportsBettingError::Overflow)?;
        self.total_won = self
            .total_won
            .checked_add(amount)
            .ok_or(SportsBettingError::Overflow)?;
        Ok(())
    }

    pub fn can_debit(&self, amount: u64) -> Result<()> {
        require!(amount > 0, SportsBettingError::InvalidAmount);
        require!(
            amount <= self.amount,
            SportsBettingError::InsufficientBalance
        );
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        self.can_debit(amount)?;
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(SportsBettingError::Underflow)?;
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(SportsBettingError::Overflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BET_REWARD;
    use anchor_lang::error::Error;

    #[test]
    fn test_ensure_owner_binds_once() {
        let owner = Pubkey::new_unique();
        let mut balance = UserBalance::default();

        balance.ensure_owner(owner, 254).unwrap();
        assert_eq!(balance.owner, owner);
        assert_eq!(balance.bump, 254);

        balance.ensure_owner(owner, 254).unwrap();
        let err = balance.ensure_owner(Pubkey::new_unique(), 254).unwrap_err();
        assert_eq!(err, Error::from(SportsBettingError::InvalidBalanceAccount));
    }

    #[test]
    fn test_credit_then_withdraw_everything() {
        let mut balance = UserBalance::default();
        balance.credit(BET_REWARD).unwrap();
        assert_eq!(balance.amount, BET_REWARD);

        balance.debit(BET_REWARD).unwrap();
        assert_eq!(balance.amount, 0);
        assert_eq!(balance.total_won, BET_REWARD);
        assert_eq!(balance.total_withdrawn, BET_REWARD);
    }

    #[test]
    fn test_debit_more_than_balance_rejected() {
        let mut balance = UserBalance::default();
        balance.credit(BET_REWARD).unwrap();

        let err = balance.debit(BET_REWARD + 1).unwrap_err();
        assert_eq!(err, Error::from(SportsBettingError::InsufficientBalance));
        assert_eq!(balance.amount, BET_REWARD);
        assert_eq!(balance.total_withdrawn, 0);
    }

    #[test]
    fn test_debit_zero_rejected() {
        let mut balance = UserBalance::default();
        let err = balance.debit(0).unwrap_err();
        assert_eq!(err, Error::from(SportsBettingError::InvalidAmount));
    }

    #[test]
    fn test_partial_withdrawals() {
        let mut balance = UserBalance::default();
        balance.credit(BET_REWARD).unwrap();
        balance.debit(BET_REWARD / 4).unwrap();
        balance.debit(BET_REWARD / 4).unwrap();
        assert_eq!(balance.amount, BET_REWARD / 2);
    }
}
