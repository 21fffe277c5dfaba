//! Page Configuration
//!
//! Selectors and display settings, overridable per page with a JSON block:
//! `<script type="application/json" id="storefront-config">{ ... }</script>`.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use cart_domain::DEFAULT_CURRENCY_SYMBOL;

/// Id of the optional configuration block
pub const CONFIG_ELEMENT_ID: &str = "storefront-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed #storefront-config block: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Storefront front-end settings (every field has a default)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Prefix for every displayed amount
    pub currency_symbol: String,
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
    /// Wrapper present only on the cart page
    pub cart_page_selector: String,
    /// Container of the server-rendered cart rows
    pub cart_list_selector: String,
    /// Grand total display
    pub cart_total_selector: String,
    /// Optional badge with the number of units in the cart
    pub cart_count_selector: String,
    /// One server-rendered cart row
    pub cart_item_selector: String,
    /// Quantity text inside a row
    pub quantity_selector: String,
    /// Product name inside a row
    pub name_selector: String,
    /// Wrapper present only on product detail pages
    pub product_page_selector: String,
    /// Add-to-cart controls on a product page
    pub product_controls_selector: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            log_level: "info".to_string(),
            cart_page_selector: ".cart-page-wrapper".to_string(),
            cart_list_selector: "#cart-items-list".to_string(),
            cart_total_selector: "#cart-total-price".to_string(),
            cart_count_selector: "#cart-count".to_string(),
            cart_item_selector: ".cart-item".to_string(),
            quantity_selector: ".quantity-value-cart".to_string(),
            name_selector: ".cart-item-name".to_string(),
            product_page_selector: ".page-product".to_string(),
            product_controls_selector: ".cart-controls".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Parse the contents of the configuration block
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    /// Configured level, `Info` when unrecognised
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }
}
