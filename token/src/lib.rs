/*!
Fungible Token ledger with JSON serialization.
NOTES:
  - The maximum balance value is limited by U128 (2**128 - 1).
  - JSON calls should pass U128 as a base-10 string. E.g. "100".
  - The whole supply is assigned to the owner at initialization. There is no mint or burn
    afterwards, so the sum of all balances always equals the total supply.
  - Any account holding tokens can transfer them. Being the owner grants no extra rights.
  - Every successful transfer is appended to an on-chain log that can be paged through
    with `ft_transfer_events` and is also emitted as a NEP-297 `ft_transfer` event.
*/
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LazyOption, LookupMap, Vector};
use near_sdk::json_types::U128;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{env, log, near_bindgen, AccountId, Balance, BorshStorageKey, PanicOnDefault};

pub use crate::constants::*;
pub use crate::enumeration::*;
pub use crate::error::*;
pub use crate::events::*;
pub use crate::ft_core::*;
pub use crate::metadata::*;

mod constants;
mod enumeration;
mod error;
mod events;
mod ft_core;
mod internal;
mod metadata;

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct TokenContract {
    // receives the whole supply at initialization, immutable afterwards
    pub owner_id: AccountId,

    // fixed at initialization
    pub total_supply: Balance,

    // accounts with zero balance are not stored
    pub balances: LookupMap<AccountId, Balance>,

    // append-only, one entry per successful transfer
    pub transfer_events: Vector<TransferEvent>,

    pub metadata: LazyOption<FungibleTokenMetadata>,
}

/// Helper structure for keys of the persistent collections.
#[derive(BorshStorageKey, BorshSerialize)]
pub enum TokenStorageKey {
    Balances,
    TransferEvents,
    Metadata,
}

#[near_bindgen]
impl TokenContract {
    /// Initializes the contract with the given total supply (or the default one) owned by
    /// the caller, with default metadata.
    #[init]
    pub fn new_default_meta(total_supply: Option<U128>) -> Self {
        Self::new(
            env::predecessor_account_id(),
            total_supply.unwrap_or(U128(DEFAULT_TOTAL_SUPPLY)),
            FungibleTokenMetadata::default_meta(),
        )
    }

    /// Initializes the contract with the given total supply owned by the given `owner_id` with
    /// the given fungible token metadata.
    #[init]
    pub fn new(owner_id: AccountId, total_supply: U128, metadata: FungibleTokenMetadata) -> Self {
        assert!(!env::state_exists(), "Already initialized");
        if let Err(err) = metadata.assert_valid() {
            env::panic_str(&err.to_string());
        }
        let total_supply: Balance = total_supply.into();

        let mut this = Self {
            owner_id: owner_id.clone(),
            total_supply,
            balances: LookupMap::new(TokenStorageKey::Balances),
            transfer_events: Vector::new(TokenStorageKey::TransferEvents),
            metadata: LazyOption::new(TokenStorageKey::Metadata, Some(&metadata)),
        };
        this.internal_deposit(&owner_id, total_supply);

        log!("Initialized {} with supply {} owned by @{}", metadata.symbol, total_supply, owner_id);
        FtMintLog::emit(&owner_id, total_supply, Some(INITIAL_MINT_MEMO));

        this
    }
}
