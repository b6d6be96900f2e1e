use crate::*;

// Supply assigned to the owner by `new_default_meta` when none is given
pub const DEFAULT_TOTAL_SUPPLY: Balance = 1_000_000;

// Default metadata
pub const DEFAULT_TOKEN_NAME: &str = "My Hardhat Token";
pub const DEFAULT_TOKEN_SYMBOL: &str = "MHT";
pub const DEFAULT_TOKEN_DECIMALS: u8 = 0;

// This spec can be treated like a version of the standard.
pub const FT_METADATA_SPEC: &str = "ft-1.0.0";
// This is the name of the FT standard we're using
pub const FT_STANDARD_NAME: &str = "nep141";
pub const FT_EVENT_VERSION: &str = "1.0.0";

pub const INITIAL_MINT_MEMO: &str = "new tokens are minted";

// Enumeration
pub const DEFAULT_EVENTS_PAGE_LIMIT: u64 = 10;
