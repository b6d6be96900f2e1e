use crate::*;

#[cfg(test)]
#[path = "ft_core_tests.rs"]
mod ft_core_tests;

pub trait FungibleTokenCore {
    /// Transfers `amount` of tokens from the caller to `receiver_id`.
    /// Panics with "Not enough tokens" if the caller's balance does not cover `amount`.
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>);

    fn ft_total_supply(&self) -> U128;

    /// Returns 0 for accounts that never received tokens.
    fn ft_balance_of(&self, account_id: AccountId) -> U128;

    /// Account that received the initial supply.
    fn ft_owner(&self) -> AccountId;
}

#[near_bindgen]
impl FungibleTokenCore for TokenContract {
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>) {
        //the caller is the sender
        let sender_id = env::predecessor_account_id();

        if let Err(err) =
            self.internal_transfer(&sender_id, &receiver_id, amount.into(), memo.as_deref())
        {
            env::panic_str(&err.to_string());
        }
    }

    fn ft_total_supply(&self) -> U128 {
        self.total_supply.into()
    }

    fn ft_balance_of(&self, account_id: AccountId) -> U128 {
        self.internal_balance_of(&account_id).into()
    }

    fn ft_owner(&self) -> AccountId {
        self.owner_id.clone()
    }
}
