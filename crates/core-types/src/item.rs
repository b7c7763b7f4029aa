use crate::CoreError;
use serde::{Deserialize, Serialize};

/// An entry of the fixed demo catalog served by `/items/{item_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

impl Item {
    /// The demo catalog. It lives in memory and never changes.
    pub fn catalog() -> Vec<Item> {
        (1..=3)
            .map(|id| Item {
                id,
                name: format!("Item {id}"),
            })
            .collect()
    }

    pub fn find(catalog: &[Item], item_id: i64) -> Option<&Item> {
        catalog.iter().find(|item| item.id == item_id)
    }
}

/// Payload accepted by `POST /items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
}

impl ItemDraft {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_none() {
            return Err(CoreError::invalid("name", "Name is required"));
        }
        if self.price.is_some_and(|price| price < 0) {
            return Err(CoreError::invalid("price", "Price cannot be negative"));
        }
        Ok(())
    }
}
