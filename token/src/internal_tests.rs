#[cfg(test)]
mod internal_tests {
    use crate::*;
    use near_sdk::test_utils::{accounts, get_logs, VMContextBuilder};
    use near_sdk::{testing_env, AccountId, Balance};

    const TOTAL_SUPPLY: Balance = 10_000;

    fn get_context(predecessor_account_id: AccountId) -> VMContextBuilder {
        let mut builder = VMContextBuilder::new();
        builder
            .current_account_id(accounts(0))
            .signer_account_id(predecessor_account_id.clone())
            .predecessor_account_id(predecessor_account_id);
        builder
    }

    fn test_token(owner_id: AccountId, total_supply: Balance) -> TokenContract {
        testing_env!(get_context(owner_id.clone()).build());
        TokenContract::new(
            owner_id,
            total_supply.into(),
            FungibleTokenMetadata::default_meta(),
        )
    }

    fn sum_of_balances(token: &TokenContract, account_ids: &[AccountId]) -> Balance {
        account_ids
            .iter()
            .map(|account_id| token.internal_balance_of(account_id))
            .sum()
    }

    #[test]
    fn test_initial_allocation() {
        let token = test_token(accounts(1), TOTAL_SUPPLY);
        assert_eq!(token.internal_balance_of(&accounts(1)), TOTAL_SUPPLY);
        assert_eq!(token.internal_balance_of(&accounts(2)), 0);
        assert_eq!(token.total_supply, TOTAL_SUPPLY);
        assert_eq!(token.owner_id, accounts(1));
        assert_eq!(token.transfer_events.len(), 0, "Construction must not record a transfer");
    }

    #[test]
    fn test_transfer_owner_to_account() {
        let owner_id = accounts(1);
        let mut token = test_token(owner_id.clone(), TOTAL_SUPPLY);

        token
            .internal_transfer(&owner_id, &accounts(2), 50, None)
            .expect("Transfer should succeed");

        assert_eq!(token.internal_balance_of(&owner_id), 9950);
        assert_eq!(token.internal_balance_of(&accounts(2)), 50);
        assert_eq!(token.transfer_events.len(), 1);
        assert_eq!(
            token.transfer_events.get(0),
            Some(TransferEvent {
                old_owner_id: owner_id,
                new_owner_id: accounts(2),
                amount: 50,
            })
        );
    }

    #[test]
    fn test_transfer_between_accounts() {
        let owner_id = accounts(1);
        let mut token = test_token(owner_id.clone(), TOTAL_SUPPLY);

        token.internal_transfer(&owner_id, &accounts(2), 50, None).unwrap();
        token.internal_transfer(&accounts(2), &accounts(3), 50, None).unwrap();

        assert_eq!(token.internal_balance_of(&accounts(2)), 0);
        assert_eq!(token.internal_balance_of(&accounts(3)), 50);
        assert_eq!(token.internal_balance_of(&owner_id), 9950);
        // emptied accounts are dropped from storage
        assert!(token.balances.get(&accounts(2)).is_none());
        assert_eq!(
            sum_of_balances(&token, &[owner_id, accounts(2), accounts(3)]),
            TOTAL_SUPPLY
        );
        assert_eq!(token.transfer_events.len(), 2);
    }

    #[test]
    fn test_transfer_insufficient_balance() {
        let owner_id = accounts(1);
        let mut token = test_token(owner_id.clone(), TOTAL_SUPPLY);

        let err = token
            .internal_transfer(&accounts(2), &owner_id, 1, None)
            .unwrap_err();
        assert_eq!(err.code(), TokenErrorCode::InsufficientBalance.to_u16());
        assert_eq!(err.to_string(), "Not enough tokens");

        assert_eq!(token.internal_balance_of(&owner_id), TOTAL_SUPPLY);
        assert_eq!(token.internal_balance_of(&accounts(2)), 0);
        assert_eq!(token.transfer_events.len(), 0);
    }

    #[test]
    fn test_transfer_more_than_balance_leaves_state_untouched() {
        let owner_id = accounts(1);
        let mut token = test_token(owner_id.clone(), TOTAL_SUPPLY);
        token.internal_transfer(&owner_id, &accounts(2), 50, None).unwrap();

        let result = token.internal_transfer(&accounts(2), &accounts(3), 51, None);
        assert_eq!(result, Err(TokenError::insufficient_balance()));

        assert_eq!(token.internal_balance_of(&accounts(2)), 50);
        assert_eq!(token.internal_balance_of(&accounts(3)), 0);
        assert_eq!(token.transfer_events.len(), 1);
    }

    #[test]
    fn test_self_transfer() {
        let owner_id = accounts(1);
        let mut token = test_token(owner_id.clone(), TOTAL_SUPPLY);

        token.internal_transfer(&owner_id, &owner_id, 500, None).unwrap();

        assert_eq!(token.internal_balance_of(&owner_id), TOTAL_SUPPLY);
        assert_eq!(token.transfer_events.len(), 1);
    }

    #[test]
    fn test_zero_amount_transfer() {
        let owner_id = accounts(1);
        let mut token = test_token(owner_id.clone(), TOTAL_SUPPLY);

        // an account without tokens can still send nothing
        token.internal_transfer(&accounts(2), &owner_id, 0, None).unwrap();

        assert_eq!(token.internal_balance_of(&owner_id), TOTAL_SUPPLY);
        assert!(token.balances.get(&accounts(2)).is_none());
        assert_eq!(token.transfer_events.len(), 1);
    }

    #[test]
    fn test_transfer_whole_supply() {
        let owner_id = accounts(1);
        let mut token = test_token(owner_id.clone(), TOTAL_SUPPLY);

        token
            .internal_transfer(&owner_id, &accounts(2), TOTAL_SUPPLY, None)
            .unwrap();

        assert_eq!(token.internal_balance_of(&owner_id), 0);
        assert_eq!(token.internal_balance_of(&accounts(2)), TOTAL_SUPPLY);
        // ownership is not tied to holding tokens
        assert_eq!(token.owner_id, owner_id);
    }

    #[test]
    fn test_transfer_logs_event() {
        let owner_id = accounts(1);
        let mut token = test_token(owner_id.clone(), TOTAL_SUPPLY);

        token
            .internal_transfer(&owner_id, &accounts(2), 50, Some("rent"))
            .unwrap();

        let logs = get_logs();
        assert_eq!(
            logs.last().map(String::as_str),
            Some(r#"EVENT_JSON:{"standard":"nep141","version":"1.0.0","event":"ft_transfer","data":[{"old_owner_id":"bob","new_owner_id":"charlie","amount":"50","memo":"rent"}]}"#)
        );
    }

    #[test]
    fn test_failed_transfer_logs_nothing() {
        let owner_id = accounts(1);
        let mut token = test_token(owner_id.clone(), TOTAL_SUPPLY);
        let logs_before = get_logs().len();

        assert!(token.internal_transfer(&accounts(2), &owner_id, 1, None).is_err());

        assert_eq!(get_logs().len(), logs_before);
    }

    #[test]
    #[should_panic(expected = "Balance overflow")]
    fn test_deposit_overflow() {
        let owner_id = accounts(1);
        let mut token = test_token(owner_id.clone(), TOTAL_SUPPLY);
        token.internal_deposit(&owner_id, Balance::MAX);
    }

    #[test]
    #[should_panic(expected = "Balance underflow")]
    fn test_withdraw_underflow() {
        let mut token = test_token(accounts(1), TOTAL_SUPPLY);
        token.internal_withdraw(&accounts(2), 1);
    }
}
