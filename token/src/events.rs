use std::fmt;

use crate::*;

/// Record of a completed transfer, kept in the on-chain transfer log.
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, PartialEq)]
pub struct TransferEvent {
    pub old_owner_id: AccountId,
    pub new_owner_id: AccountId,
    pub amount: Balance,
}

/// Interface to capture data about an event
///
/// Arguments:
/// * `standard`: name of standard e.g. nep141
/// * `version`: e.g. 1.0.0
/// * `event`: associate event data
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct EventLog {
    pub standard: String,
    pub version: String,

    // `flatten` to not have "event": {<EventLogVariant>} in the JSON, just have the contents of {<EventLogVariant>}.
    #[serde(flatten)]
    pub event: EventLogVariant,
}

/// Enum that represents the data type of the EventLog.
#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
#[serde(crate = "near_sdk::serde")]
pub enum EventLogVariant {
    FtMint(Vec<FtMintLog>),
    FtTransfer(Vec<FtTransferLog>),
}

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "EVENT_JSON:{}",
            near_sdk::serde_json::to_string(self).map_err(|_| fmt::Error)?
        ))
    }
}

impl EventLog {
    fn new(event: EventLogVariant) -> EventLog {
        EventLog {
            standard: FT_STANDARD_NAME.to_string(),
            version: FT_EVENT_VERSION.to_string(),
            event,
        }
    }

    pub(crate) fn emit(self) {
        env::log_str(&self.to_string());
    }
}

/// An event log to capture tokens minting
///
/// Arguments
/// * `owner_id`: "account.near"
/// * `amount`: the number of tokens minted, wrapped in quotes and treated like a string
/// * `memo`: optional message
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct FtMintLog {
    pub owner_id: String,
    pub amount: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl FtMintLog {
    pub(crate) fn emit(owner_id: &AccountId, amount: Balance, memo: Option<&str>) {
        EventLog::new(EventLogVariant::FtMint(vec![FtMintLog {
            owner_id: owner_id.to_string(),
            amount: amount.to_string(),
            memo: memo.map(|memo| memo.to_string()),
        }]))
        .emit();
    }
}

/// An event log to capture tokens transfer
///
/// Arguments
/// * `old_owner_id`: "owner.near"
/// * `new_owner_id`: "receiver.near"
/// * `amount`: the number of tokens to transfer, wrapped in quotes and treated like a string
/// * `memo`: optional message
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct FtTransferLog {
    pub old_owner_id: String,
    pub new_owner_id: String,
    pub amount: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl FtTransferLog {
    pub(crate) fn emit(event: &TransferEvent, memo: Option<&str>) {
        EventLog::new(EventLogVariant::FtTransfer(vec![FtTransferLog {
            old_owner_id: event.old_owner_id.to_string(),
            new_owner_id: event.new_owner_id.to_string(),
            amount: event.amount.to_string(),
            memo: memo.map(|memo| memo.to_string()),
        }]))
        .emit();
    }
}
