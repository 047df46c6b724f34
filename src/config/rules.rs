use crate::utils::error::{EngineError, Result};
use serde::Deserialize;

/// Minimum quantity applied when a stored rule omits the threshold or
/// carries a non-positive one.
pub const DEFAULT_MIN_QUANTITY: u32 = 2;

/// Percentage applied when a stored rule omits the discount or carries a
/// negative one. A zero-percent rule matches but discounts nothing.
pub const DEFAULT_DISCOUNT_PERCENTAGE: f64 = 0.0;

/// One normalized discount rule. The rule set is ordered; duplicate
/// `product_id` entries are tolerated and the first one wins at match time.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountRule {
    pub product_id: String,
    pub discount_percentage: f64,
    pub min_quantity: u32,
}

/// Wire shape of a stored rule, before normalization. Only the product id is
/// required; the admin surface historically saved partial records.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRule {
    product_id: String,
    #[serde(default)]
    discount_percentage: Option<f64>,
    #[serde(default)]
    min_quantity: Option<i64>,
}

impl RawRule {
    fn normalize(self) -> DiscountRule {
        let discount_percentage = match self.discount_percentage {
            Some(p) if p >= 0.0 => p,
            _ => DEFAULT_DISCOUNT_PERCENTAGE,
        };
        let min_quantity = match self.min_quantity {
            // Thresholds beyond u32 stay unreachable rather than wrapping.
            Some(q) if q > 0 => u32::try_from(q).unwrap_or(u32::MAX),
            _ => DEFAULT_MIN_QUANTITY,
        };

        DiscountRule {
            product_id: self.product_id,
            discount_percentage,
            min_quantity,
        }
    }
}

/// Decodes the raw rule-storage value into an ordered rule set.
///
/// An absent value is an empty rule set, not an error: the shop simply has
/// no rules configured yet. A present but undecodable value is reported as
/// `ConfigMalformed`; callers on the checkout path must treat that as an
/// empty rule set rather than failing the calculation.
pub fn decode_rules(raw: Option<&str>) -> Result<Vec<DiscountRule>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let parsed: Vec<RawRule> =
        serde_json::from_str(raw).map_err(EngineError::ConfigMalformed)?;

    Ok(parsed.into_iter().map(RawRule::normalize).collect())
}
