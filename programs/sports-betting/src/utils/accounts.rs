use anchor_lang::prelude::*;

/// Reads a program account that may not exist yet. Returns `None` for an
/// empty account, a foreign owner, or data that is not a `T`.
pub fn read_account<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Option<T> {
    if info.data_is_empty() || *info.owner != T::owner() {
        return None;
    }
    let data = info.try_borrow_data().ok()?;
    let mut bytes: &[u8] = &data;
    T::try_deserialize(&mut bytes).ok()
}

/// Writes `account` back into `info`, discriminator included.
pub fn write_account<T: AccountSerialize>(info: &AccountInfo, account: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    account.try_serialize(&mut writer)?;
    Ok(())
}
