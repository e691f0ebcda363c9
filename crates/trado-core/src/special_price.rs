//! # Special Price Resolution
//!
//! Customer-specific price overrides and the lookup that applies them.
//!
//! ## How Overrides Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                Resolving a Line's Unit Price                            │
//! │                                                                         │
//! │  New line for (customer, product, unit)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SpecialPriceBook.get(customer, product)                               │
//! │       │                                                                 │
//! │       ├── override with a price for this unit                          │
//! │       │      └──► { price: override, is_override: true }               │
//! │       │                                                                 │
//! │       └── no override (or override lacks this unit)                    │
//! │              └──► { price: default, is_override: false }               │
//! │                                                                         │
//! │  default_price always carries the product default, so the UI can       │
//! │  offer "reset to default" regardless of what was applied.              │
//! │                                                                         │
//! │  Later, when the document is saved:                                    │
//! │    applied price ≠ resolved price ──► upsert a SpecialPrice            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown products and missing unit prices are explicit [`CoreError`]s, not
//! silent zeros.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CustomerId, ProductId, UnitType};

// =============================================================================
// Product Default Prices
// =============================================================================

/// A product's configured default prices, one per unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductPrices {
    pub product_id: ProductId,

    /// Price for the base selling unit (piece, kg).
    pub base_price: Money,

    /// Price for the optional second unit (box, carton).
    pub second_price: Option<Money>,
}

impl ProductPrices {
    /// A product priced only by its base unit.
    pub const fn new(product_id: ProductId, base_price: Money) -> Self {
        ProductPrices {
            product_id,
            base_price,
            second_price: None,
        }
    }

    /// Adds a second-unit price.
    pub const fn with_second_price(mut self, price: Money) -> Self {
        self.second_price = Some(price);
        self
    }

    /// The configured price for a unit, if any.
    pub fn price_for(&self, unit_type: UnitType) -> Option<Money> {
        match unit_type {
            UnitType::Base => Some(self.base_price),
            UnitType::Second => self.second_price,
        }
    }
}

// =============================================================================
// Special Price
// =============================================================================

/// A customer-specific override of a product's default unit prices.
///
/// Created or refreshed when a saved transaction applied a unit price that
/// differs from the product's default for that customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SpecialPrice {
    pub customer_id: CustomerId,
    pub product_id: ProductId,

    /// Override for the base unit.
    pub base_price: Money,

    /// Override for the second unit, if the customer has one.
    pub second_price: Option<Money>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl SpecialPrice {
    /// Creates a fresh override with both audit timestamps set to now.
    pub fn new(customer_id: CustomerId, product_id: ProductId, base_price: Money) -> Self {
        let now = Utc::now();
        SpecialPrice {
            customer_id,
            product_id,
            base_price,
            second_price: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds a second-unit override.
    pub fn with_second_price(mut self, price: Money) -> Self {
        self.second_price = Some(price);
        self
    }

    /// The override price for a unit, if one is set.
    ///
    /// An override lacking a second-unit price does NOT blanket the second
    /// unit with zero; resolution falls back to the product default.
    pub fn price_for(&self, unit_type: UnitType) -> Option<Money> {
        match unit_type {
            UnitType::Base => Some(self.base_price),
            UnitType::Second => self.second_price,
        }
    }
}

// =============================================================================
// Special Price Book
// =============================================================================

/// In-memory lookup of overrides keyed by (customer, product).
///
/// The surrounding application loads this from the backend once per editing
/// session; this crate only reads and mutates the in-memory copy.
#[derive(Debug, Clone, Default)]
pub struct SpecialPriceBook {
    entries: HashMap<(CustomerId, ProductId), SpecialPrice>,
}

impl SpecialPriceBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        SpecialPriceBook {
            entries: HashMap::new(),
        }
    }

    /// Looks up the override for a customer/product pair.
    pub fn get(&self, customer_id: CustomerId, product_id: ProductId) -> Option<&SpecialPrice> {
        self.entries.get(&(customer_id, product_id))
    }

    /// Inserts or refreshes an override.
    ///
    /// On refresh the original `created_at` is kept and `updated_at` moves
    /// to now, matching how the backend audits these records.
    pub fn upsert(&mut self, entry: SpecialPrice) {
        let key = (entry.customer_id, entry.product_id);
        match self.entries.get_mut(&key) {
            Some(existing) => {
                existing.base_price = entry.base_price;
                existing.second_price = entry.second_price;
                existing.updated_at = Utc::now();
            }
            None => {
                self.entries.insert(key, entry);
            }
        }
    }

    /// Number of overrides in the book.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the book holds no overrides.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// The outcome of resolving a line's unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPrice {
    /// The price to initialize the line with.
    pub price: Money,

    /// Whether a customer override supplied `price`.
    pub is_override: bool,

    /// The product's default price for the unit, always present so the UI
    /// can offer a "reset to default" action.
    pub default_price: Money,
}

/// Resolves the effective unit price for a customer/product/unit triple.
///
/// ## Errors
/// - [`CoreError::ProductNotFound`] if `product_id` is not in `products`
/// - [`CoreError::MissingUnitPrice`] if the product has no price for the
///   requested unit
///
/// ## Example
/// ```rust
/// use std::collections::HashMap;
/// use trado_core::money::Money;
/// use trado_core::special_price::{
///     resolve_unit_price, ProductPrices, SpecialPrice, SpecialPriceBook,
/// };
/// use trado_core::types::{CustomerId, ProductId, UnitType};
///
/// let product = ProductId::new(1);
/// let customer = CustomerId::new(9);
///
/// let mut products = HashMap::new();
/// products.insert(product, ProductPrices::new(product, Money::from_mils(10_000)));
///
/// let mut book = SpecialPriceBook::new();
/// book.upsert(SpecialPrice::new(customer, product, Money::from_mils(8_000)));
///
/// let resolved =
///     resolve_unit_price(customer, product, UnitType::Base, &products, &book).unwrap();
/// assert_eq!(resolved.price.mils(), 8_000);
/// assert!(resolved.is_override);
/// assert_eq!(resolved.default_price.mils(), 10_000);
/// ```
pub fn resolve_unit_price(
    customer_id: CustomerId,
    product_id: ProductId,
    unit_type: UnitType,
    products: &HashMap<ProductId, ProductPrices>,
    book: &SpecialPriceBook,
) -> CoreResult<ResolvedPrice> {
    let product = products
        .get(&product_id)
        .ok_or(CoreError::ProductNotFound(product_id))?;

    let default_price = product
        .price_for(unit_type)
        .ok_or(CoreError::MissingUnitPrice {
            product_id,
            unit_type,
        })?;

    let override_price = book
        .get(customer_id, product_id)
        .and_then(|sp| sp.price_for(unit_type));

    Ok(match override_price {
        Some(price) => ResolvedPrice {
            price,
            is_override: true,
            default_price,
        },
        None => ResolvedPrice {
            price: default_price,
            is_override: false,
            default_price,
        },
    })
}

/// Whether the price a transaction actually applied differs from what was
/// resolved. A `true` here is the caller's cue to upsert a [`SpecialPrice`].
#[inline]
pub fn price_differs(applied: Money, resolved: &ResolvedPrice) -> bool {
    applied != resolved.price
}

// =============================================================================
// Unit Tests
// =============================================================================
