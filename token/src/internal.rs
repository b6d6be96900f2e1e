use crate::*;

#[cfg(test)]
#[path = "internal_tests.rs"]
mod internal_tests;

#[cfg(test)]
#[path = "invariant_tests.rs"]
mod invariant_tests;

impl TokenContract {
    pub(crate) fn internal_balance_of(&self, account_id: &AccountId) -> Balance {
        self.balances.get(account_id).unwrap_or(0)
    }

    // only ever called from initialization and `internal_transfer`
    pub(crate) fn internal_deposit(&mut self, account_id: &AccountId, amount: Balance) {
        let balance = self.internal_balance_of(account_id);
        let new_balance = balance
            .checked_add(amount)
            .unwrap_or_else(|| env::panic_str("Balance overflow"));
        self.internal_set_balance(account_id, new_balance);
    }

    // caller must have checked the balance covers `amount`
    pub(crate) fn internal_withdraw(&mut self, account_id: &AccountId, amount: Balance) {
        let balance = self.internal_balance_of(account_id);
        let new_balance = balance
            .checked_sub(amount)
            .unwrap_or_else(|| env::panic_str("Balance underflow"));
        self.internal_set_balance(account_id, new_balance);
    }

    fn internal_set_balance(&mut self, account_id: &AccountId, balance: Balance) {
        if balance == 0 {
            self.balances.remove(account_id);
        } else {
            self.balances.insert(account_id, &balance);
        }
    }

    /// Moves `amount` from `sender_id` to `receiver_id` and records the transfer.
    /// Nothing is written when the sender cannot cover the amount.
    pub(crate) fn internal_transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        amount: Balance,
        memo: Option<&str>,
    ) -> Result<(), TokenError> {
        let sender_balance = self.internal_balance_of(sender_id);
        if sender_balance < amount {
            return TokenError::insufficient_balance().into_err();
        }

        // no early return past this point
        self.internal_withdraw(sender_id, amount);
        self.internal_deposit(receiver_id, amount);

        let event = TransferEvent {
            old_owner_id: sender_id.clone(),
            new_owner_id: receiver_id.clone(),
            amount,
        };
        self.transfer_events.push(&event);
        FtTransferLog::emit(&event, memo);

        Ok(())
    }
}
