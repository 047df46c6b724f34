use crate::domain::model::{CartLine, DiscountableLine, MerchandiseKind};

/// Decides whether a cart line is a discountable unit: a single product
/// variant carrying both identifiers. Everything else (bundles, pre-order
/// placeholders, unknown kinds, malformed variant lines) is excluded without
/// error so the checkout calculation keeps going.
pub fn classify_line(line: &CartLine) -> Option<DiscountableLine<'_>> {
    match line.merchandise_kind {
        MerchandiseKind::ProductVariant => {
            let variant_id = line.variant_id.as_deref()?;
            let product_id = line.product_id.as_deref()?;
            // Quantity passes through verbatim; inventory is the host's problem.
            Some(DiscountableLine {
                variant_id,
                product_id,
                quantity: line.quantity,
            })
        }
        MerchandiseKind::Other => None,
    }
}
