use crate::*;
use near_sdk::json_types::Base64VecU8;

#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct FungibleTokenMetadata {
    pub spec: String,              // required, essentially a version like "ft-1.0.0"
    pub name: String,              // required, ex. "My Hardhat Token"
    pub symbol: String,            // required, ex. "MHT"
    pub icon: Option<String>,      // Data URL
    pub reference: Option<String>, // URL to a JSON file with more info
    pub reference_hash: Option<Base64VecU8>, // Base64-encoded sha256 hash of JSON from reference field. Required if `reference` is included.
    pub decimals: u8,
}

impl FungibleTokenMetadata {
    pub fn default_meta() -> FungibleTokenMetadata {
        FungibleTokenMetadata {
            spec: FT_METADATA_SPEC.to_string(),
            name: DEFAULT_TOKEN_NAME.to_string(),
            symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
            icon: None,
            reference: None,
            reference_hash: None,
            decimals: DEFAULT_TOKEN_DECIMALS,
        }
    }

    pub fn assert_valid(&self) -> Result<(), TokenError> {
        if self.spec != FT_METADATA_SPEC {
            return TokenError::new(
                TokenErrorCode::InvalidMetadata,
                &format!("Metadata spec must be {}", FT_METADATA_SPEC),
            )
            .into_err();
        }
        if self.name.is_empty() {
            return TokenError::new(TokenErrorCode::InvalidMetadata, "Name cannot be empty").into_err();
        }
        if self.symbol.is_empty() {
            return TokenError::new(TokenErrorCode::InvalidMetadata, "Symbol cannot be empty").into_err();
        }
        if self.reference.is_some() != self.reference_hash.is_some() {
            return TokenError::new(
                TokenErrorCode::InvalidMetadata,
                "Reference and reference hash must be provided together",
            )
            .into_err();
        }
        if let Some(reference_hash) = &self.reference_hash {
            if reference_hash.0.len() != 32 {
                return TokenError::new(TokenErrorCode::InvalidMetadata, "Hash has to be 32 bytes")
                    .into_err();
            }
        }
        Ok(())
    }
}

pub trait FungibleTokenMetadataProvider {
    //view call for returning the contract metadata
    fn ft_metadata(&self) -> FungibleTokenMetadata;
}

#[near_bindgen]
impl FungibleTokenMetadataProvider for TokenContract {
    fn ft_metadata(&self) -> FungibleTokenMetadata {
        self.metadata
            .get()
            .unwrap_or_else(|| env::panic_str("Token metadata is missing"))
    }
}
