use crate::adapters::TracingSink;
use crate::config::rules::decode_rules;
use crate::core::build::DiscountBuilder;
use crate::core::classify::classify_line;
use crate::core::matching::match_rule;
use crate::core::{DiagnosticEvent, DiagnosticSink};
use crate::domain::model::{EvaluationResult, RunInput};

/// The evaluation engine: one synchronous pass over the cart per invocation.
///
/// The engine is total. Whatever the input looks like (absent configuration,
/// malformed configuration, unsupported lines), it returns a well-formed
/// result; failures surface only through the injected diagnostic sink. A
/// broken result here would abort the surrounding checkout calculation, so
/// degrading to `discounts: []` is the contract.
pub struct DiscountEngine<D: DiagnosticSink> {
    sink: D,
}

impl<D: DiagnosticSink> DiscountEngine<D> {
    pub fn new(sink: D) -> Self {
        Self { sink }
    }

    pub fn run(&self, input: &RunInput) -> EvaluationResult {
        let rules = match decode_rules(input.shop_config.as_deref()) {
            Ok(rules) => rules,
            Err(error) => {
                // Bad configuration must not block checkout; evaluate as if
                // no rules were stored.
                self.sink
                    .record(DiagnosticEvent::ConfigMalformed { error: &error });
                Vec::new()
            }
        };

        let mut builder = DiscountBuilder::new();

        for (index, line) in input.cart_lines.iter().enumerate() {
            let Some(discountable) = classify_line(line) else {
                self.sink.record(DiagnosticEvent::LineUnsupported { index });
                continue;
            };

            if let Some(rule) = match_rule(&discountable, &rules) {
                builder.push_match(&discountable, rule);
            }
        }

        let result = builder.finish();
        self.sink.record(DiagnosticEvent::Evaluated {
            matched: result.discounts.len(),
        });
        result
    }
}

/// Evaluates one cart with diagnostics routed to `tracing`.
pub fn evaluate(input: &RunInput) -> EvaluationResult {
    DiscountEngine::new(TracingSink).run(input)
}
