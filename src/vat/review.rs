//! Advisory cross-field checks on a return.
//!
//! Nothing here blocks editing or totals. The form may show the findings
//! next to the affected fields before the return is submitted.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::boxes::{FieldKind, Vat201Field, VatBox};
use super::vat201::{Vat201Return, standard_vat};
use crate::core::ValidationError;

/// Largest accepted gap between an entered VAT figure and 5% of the amount.
pub const VAT_TOLERANCE: Decimal = dec!(1.00);

impl Vat201Return {
    /// Collect advisory findings. An empty list means nothing looked off.
    pub fn review(&self) -> Vec<ValidationError> {
        let mut findings = Vec::new();

        for vat_box in VatBox::all() {
            let entry = self.entry(vat_box);
            let amount_field = Vat201Field::amount(vat_box).to_string();

            if entry.amount < Decimal::ZERO {
                findings.push(ValidationError::with_rule(
                    &amount_field,
                    format!("box {} amount is negative", vat_box.number()),
                    "AMOUNT-NEG",
                ));
            }

            if !vat_box.bears_vat() {
                continue;
            }
            let Ok(vat_field) = Vat201Field::new(vat_box, FieldKind::Vat) else {
                continue;
            };
            let vat_field = vat_field.to_string();

            if entry.amount.is_zero() && !entry.vat.is_zero() {
                findings.push(ValidationError::with_rule(
                    vat_field,
                    format!(
                        "box {} has VAT {} but no amount",
                        vat_box.number(),
                        entry.vat
                    ),
                    "VAT-NO-AMOUNT",
                ));
                continue;
            }

            let expected = standard_vat(entry.amount);
            let off_rate = entry
                .vat
                .checked_sub(expected)
                .is_none_or(|gap| gap.abs() > VAT_TOLERANCE);
            if off_rate {
                findings.push(ValidationError::with_rule(
                    vat_field,
                    format!(
                        "box {} VAT {} differs from 5% of amount ({expected})",
                        vat_box.number(),
                        entry.vat
                    ),
                    "VAT-RATE",
                ));
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_return_has_no_findings() {
        let mut r = Vat201Return::default();
        r.update_named("box1bDubaiAmount", "1000").unwrap();
        r.update_named("expensesAmount", "400").unwrap();
        assert!(r.review().is_empty());
    }

    #[test]
    fn vat_without_amount_flagged() {
        let mut r = Vat201Return::default();
        r.update_named("reverseChargeVat", "50").unwrap();
        let findings = r.review();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].field, "reverseChargeVat");
        assert_eq!(findings[0].rule.as_deref(), Some("VAT-NO-AMOUNT"));
    }

    #[test]
    fn vat_off_rate_flagged() {
        let mut r = Vat201Return::default();
        r.update_named("importsAmount", "1000").unwrap();
        r.update_named("importsVat", "80").unwrap();
        let findings = r.review();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule.as_deref(), Some("VAT-RATE"));
    }

    #[test]
    fn small_rounding_gap_tolerated() {
        let mut r = Vat201Return::default();
        r.update_named("importsAmount", "1000").unwrap();
        r.update_named("importsVat", "50.75").unwrap();
        assert!(r.review().is_empty());
    }

    #[test]
    fn extreme_vat_flagged_without_overflow() {
        let mut r = Vat201Return::default();
        r.update_named("importsAmount", "-1000").unwrap();
        r.imports.vat = Decimal::MAX;
        let rules: Vec<_> = r.review().into_iter().filter_map(|f| f.rule).collect();
        assert_eq!(rules, vec!["AMOUNT-NEG", "VAT-RATE"]);
    }

    #[test]
    fn finding_fields_are_form_field_names() {
        let mut r = Vat201Return::default();
        r.update_named("reverseChargeVat", "50").unwrap();
        r.update_named("importsAmount", "1000").unwrap();
        r.update_named("importsVat", "80").unwrap();
        r.update_named("exemptAmount", "-5").unwrap();
        let findings = r.review();
        assert_eq!(findings.len(), 3);
        for f in &findings {
            assert_eq!(f.field.parse::<Vat201Field>().unwrap().to_string(), f.field);
        }
    }

    #[test]
    fn negative_amount_flagged_on_zero_rated() {
        let mut r = Vat201Return::default();
        r.update_named("zeroRatedAmount", "-10").unwrap();
        let findings = r.review();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].field, "zeroRatedAmount");
    }
}
