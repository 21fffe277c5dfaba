//! Cart Actions
//!
//! The user intents a click on the cart list can carry, keyed by the
//! `data-action` marker on the clicked control.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::line_item::ItemId;

/// Action marker values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Increase,
    Decrease,
    Remove,
}

impl ActionKind {
    /// Every recognised marker
    pub const ALL: [ActionKind; 3] = [ActionKind::Increase, ActionKind::Decrease, ActionKind::Remove];

    pub fn as_marker(&self) -> &'static str {
        match self {
            ActionKind::Increase => "increase",
            ActionKind::Decrease => "decrease",
            ActionKind::Remove => "remove",
        }
    }
}

impl FromStr for ActionKind {
    type Err = CartError;

    fn from_str(marker: &str) -> Result<Self, Self::Err> {
        match marker.trim() {
            "increase" => Ok(ActionKind::Increase),
            "decrease" => Ok(ActionKind::Decrease),
            "remove" => Ok(ActionKind::Remove),
            other => Err(CartError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_marker())
    }
}

/// One reducer input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Increase(ItemId),
    Decrease(ItemId),
    Remove(ItemId),
}

impl CartAction {
    pub fn new(kind: ActionKind, id: impl Into<ItemId>) -> Self {
        let id = id.into();
        match kind {
            ActionKind::Increase => CartAction::Increase(id),
            ActionKind::Decrease => CartAction::Decrease(id),
            ActionKind::Remove => CartAction::Remove(id),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            CartAction::Increase(_) => ActionKind::Increase,
            CartAction::Decrease(_) => ActionKind::Decrease,
            CartAction::Remove(_) => ActionKind::Remove,
        }
    }

    pub fn item_id(&self) -> &ItemId {
        match self {
            CartAction::Increase(id) | CartAction::Decrease(id) | CartAction::Remove(id) => id,
        }
    }
}

/// What a successful action did to the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Item still present with its new quantity
    Updated { id: ItemId, quantity: u32 },
    /// Item no longer present
    Removed { id: ItemId },
}
