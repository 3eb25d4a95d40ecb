use crate::error::SportsBettingError;
use anchor_lang::prelude::*;

/// Lamports an account can release without dropping below rent exemption.
pub fn spendable_lamports(lamports: u64, rent_exempt_minimum: u64) -> u64 {
    lamports.saturating_sub(rent_exempt_minimum)
}

pub fn ensure_withdrawable(lamports: u64, rent_exempt_minimum: u64, amount: u64) -> Result<()> {
    require!(
        spendable_lamports(lamports, rent_exempt_minimum) >= amount,
        SportsBettingError::TransferFailed
    );
    Ok(())
}

/// Moves lamports out of an account owned by this program.
pub fn transfer_from_program_account(
    from: &AccountInfo,
    to: &AccountInfo,
    amount: u64,
) -> Result<()> {
    let remaining = from
        .lamports()
        .checked_sub(amount)
        .ok_or(SportsBettingError::TransferFailed)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(SportsBettingError::Overflow)?;

    **from.try_borrow_mut_lamports()? = remaining;
    **to.try_borrow_mut_lamports()? = credited;

    Ok(())
}
