use crate::utils::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The payload the host hands to the engine for one cart calculation.
///
/// `shop_config` is the raw rule-storage value (JSON-encoded rule array); it
/// stays opaque here and is only interpreted by the config decoder.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunInput {
    #[serde(default)]
    pub shop_config: Option<String>,
    #[serde(default)]
    pub cart_lines: Vec<CartLine>,
}

impl RunInput {
    /// 從 JSON 字串解析 run input
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(EngineError::InputMalformed)
    }

    /// 從檔案載入 run input
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_json_str(&content)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub merchandise_kind: MerchandiseKind,
    #[serde(default)]
    pub variant_id: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    pub quantity: u32,
}

/// Merchandise kinds the host may attach to a cart line. Anything the engine
/// does not recognize (bundles, subscriptions, future kinds) collapses to
/// `Other` at deserialization time and is excluded from discounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum MerchandiseKind {
    ProductVariant,
    #[serde(other)]
    Other,
}

/// Borrowed view of a cart line that passed classification: a priced,
/// discountable single product variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountableLine<'a> {
    pub variant_id: &'a str,
    pub product_id: &'a str,
    pub quantity: u32,
}

/// The result handed back to the host. Serializes to the wire shape
/// `{ "discountApplicationStrategy": "...", "discounts": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub discount_application_strategy: DiscountApplicationStrategy,
    pub discounts: Vec<Discount>,
}

impl EvaluationResult {
    /// The fail-safe result: no discounts, strategy `First`. Every failure
    /// mode inside the engine collapses to this shape.
    pub fn empty() -> Self {
        Self {
            discount_application_strategy: DiscountApplicationStrategy::First,
            discounts: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiscountApplicationStrategy {
    First,
    Maximum,
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discount {
    pub message: String,
    pub targets: Vec<Target>,
    pub value: DiscountValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub product_variant_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountValue {
    pub percentage: Percentage,
}

/// Percentage carried as a decimal string so the value crosses the protocol
/// boundary textually, without binary float drift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Percentage {
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_run_input() {
        let input = RunInput::from_json_str(
            r#"{
                "shopConfig": "[]",
                "cartLines": [
                    {
                        "merchandiseKind": "ProductVariant",
                        "variantId": "gid://V1",
                        "productId": "gid://P1",
                        "quantity": 2
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(input.shop_config.as_deref(), Some("[]"));
        assert_eq!(input.cart_lines.len(), 1);
        assert_eq!(
            input.cart_lines[0].merchandise_kind,
            MerchandiseKind::ProductVariant
        );
        assert_eq!(input.cart_lines[0].variant_id.as_deref(), Some("gid://V1"));
        assert_eq!(input.cart_lines[0].quantity, 2);
    }

    #[test]
    fn test_parse_run_input_missing_fields_default() {
        let input = RunInput::from_json_str("{}").unwrap();
        assert!(input.shop_config.is_none());
        assert!(input.cart_lines.is_empty());
    }

    #[test]
    fn test_parse_run_input_invalid_json() {
        let err = RunInput::from_json_str("not json").unwrap_err();
        assert!(matches!(err, EngineError::InputMalformed(_)));
    }

    #[test]
    fn test_unknown_merchandise_kind_collapses_to_other() {
        let input = RunInput::from_json_str(
            r#"{
                "cartLines": [
                    { "merchandiseKind": "SubscriptionBundle", "quantity": 1 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(input.cart_lines[0].merchandise_kind, MerchandiseKind::Other);
    }

    #[test]
    fn test_run_input_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{ "shopConfig": null, "cartLines": [] }"#)
            .unwrap();

        let input = RunInput::from_file(temp_file.path()).unwrap();
        assert!(input.shop_config.is_none());
        assert!(input.cart_lines.is_empty());
    }

    #[test]
    fn test_result_wire_shape() {
        let result = EvaluationResult {
            discount_application_strategy: DiscountApplicationStrategy::First,
            discounts: vec![Discount {
                message: "15% off".to_string(),
                targets: vec![Target {
                    product_variant_id: "gid://V1".to_string(),
                }],
                value: DiscountValue {
                    percentage: Percentage {
                        value: "15".to_string(),
                    },
                },
            }],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "discountApplicationStrategy": "First",
                "discounts": [
                    {
                        "message": "15% off",
                        "targets": [ { "productVariantId": "gid://V1" } ],
                        "value": { "percentage": { "value": "15" } }
                    }
                ]
            })
        );
    }

    #[test]
    fn test_empty_result_wire_shape() {
        let json = serde_json::to_value(EvaluationResult::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "discountApplicationStrategy": "First",
                "discounts": []
            })
        );
    }
}
