use crate::config::rules::DiscountRule;
use crate::domain::model::{
    Discount, DiscountApplicationStrategy, DiscountValue, DiscountableLine, EvaluationResult,
    Percentage, Target,
};

/// Accumulates discount instructions in cart-line order and packages them
/// into the host result. Pure accumulation only: no I/O, inputs untouched.
#[derive(Debug, Default)]
pub struct DiscountBuilder {
    discounts: Vec<Discount>,
}

impl DiscountBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits one instruction for a line whose rule matched.
    pub fn push_match(&mut self, line: &DiscountableLine<'_>, rule: &DiscountRule) {
        let percentage = format_percentage(rule.discount_percentage);

        self.discounts.push(Discount {
            message: format!("{}% off", percentage),
            targets: vec![Target {
                product_variant_id: line.variant_id.to_string(),
            }],
            value: DiscountValue {
                percentage: Percentage { value: percentage },
            },
        });
    }

    pub fn finish(self) -> EvaluationResult {
        EvaluationResult {
            discount_application_strategy: DiscountApplicationStrategy::First,
            discounts: self.discounts,
        }
    }
}

/// Renders the percentage as a decimal string: whole numbers without a
/// trailing ".0", fractional values as stored.
fn format_percentage(value: f64) -> String {
    value.to_string()
}
