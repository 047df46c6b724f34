use crate::config::rules::DiscountRule;
use crate::domain::model::DiscountableLine;

/// Finds the rule governing a discountable line, if any.
///
/// Linear scan in storage order, exact product-id equality, first match wins.
/// Uniqueness of product ids is assumed upstream but not enforced here, so
/// with duplicates the earliest rule decides. A matched rule still produces
/// `None` when the line's quantity sits below the rule's threshold.
pub fn match_rule<'r>(
    line: &DiscountableLine<'_>,
    rules: &'r [DiscountRule],
) -> Option<&'r DiscountRule> {
    let rule = rules.iter().find(|r| r.product_id == line.product_id)?;

    if line.quantity >= rule.min_quantity {
        Some(rule)
    } else {
        None
    }
}
