use crate::*;
use near_sdk::json_types::U64;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct JsonTransferEvent {
    pub index: U64,
    pub old_owner_id: AccountId,
    pub new_owner_id: AccountId,
    pub amount: U128,
}

impl JsonTransferEvent {
    fn from_event(index: u64, event: TransferEvent) -> JsonTransferEvent {
        JsonTransferEvent {
            index: U64(index),
            old_owner_id: event.old_owner_id,
            new_owner_id: event.new_owner_id,
            amount: U128(event.amount),
        }
    }
}

#[near_bindgen]
impl TokenContract {
    // Query for completed transfers in the order they happened, results are paginated
    pub fn ft_transfer_events(
        &self,
        from_index: Option<U64>,
        limit: Option<u64>,
    ) -> Vec<JsonTransferEvent> {
        //where to start pagination - if we have a from_index, we'll use that - otherwise start from 0 index
        let start = u64::from(from_index.unwrap_or(U64(0)));
        let count = limit.unwrap_or(DEFAULT_EVENTS_PAGE_LIMIT);

        self.transfer_events
            .iter()
            .enumerate()
            .skip(start as usize) //skip to the index we specified in the start variable
            .take(count as usize) // return "limit" elements or 0 if missing
            .map(|(index, event)| JsonTransferEvent::from_event(index as u64, event))
            .collect()
    }

    pub fn ft_transfer_events_count(&self) -> U64 {
        U64(self.transfer_events.len())
    }

    pub fn ft_last_transfer_event(&self) -> Option<JsonTransferEvent> {
        let len = self.transfer_events.len();
        if len == 0 {
            return None;
        }
        self.transfer_events
            .get(len - 1)
            .map(|event| JsonTransferEvent::from_event(len - 1, event))
    }
}
