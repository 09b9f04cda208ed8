//! VAT 201 return figures and totals.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::boxes::{Emirate, FieldKind, Vat201Field, VatBox};
use crate::core::{
    DEFAULT_CURRENCY, DaftarError, bounded_amount, format_currency, parse_amount, round_money,
    saturating_sum,
};

/// UAE standard VAT rate in percent.
pub const UAE_STANDARD_RATE: Decimal = dec!(5);

/// VAT due on `amount` at the standard rate, rounded to fils.
///
/// An amount too large to multiply yields `0`, like any other unusable input.
pub fn standard_vat(amount: Decimal) -> Decimal {
    amount
        .checked_mul(UAE_STANDARD_RATE)
        .map_or(Decimal::ZERO, |v| round_money(v / dec!(100)))
}

/// Amount, VAT and adjustment columns of one box.
///
/// Columns a box does not have stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxEntry {
    pub amount: Decimal,
    pub vat: Decimal,
    pub adjustment: Decimal,
}

/// Input figures of one VAT 201 filing period.
///
/// Editing an amount on a VAT-bearing box recomputes that box's VAT at 5%,
/// replacing whatever was typed in the VAT column. Editing a VAT or
/// adjustment column directly never triggers recomputation; the typed value
/// stands until the box's amount changes again.
///
/// The VAT column of boxes 4 and 5 is ignored by every total, so a value
/// that reaches it through deserialisation or a direct write has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vat201Return {
    /// Boxes 1a-1g, indexed by [`Emirate::index`].
    pub standard_rated: [BoxEntry; 7],
    pub tourist_refund: BoxEntry,
    pub reverse_charge: BoxEntry,
    pub zero_rated: BoxEntry,
    pub exempt: BoxEntry,
    pub imports: BoxEntry,
    pub imports_adjustment: BoxEntry,
    pub expenses: BoxEntry,
    pub expenses_reverse_charge: BoxEntry,
}

impl Vat201Return {
    /// Build a return from a server-generated draft of `(field name, value)` pairs.
    ///
    /// Draft VAT figures are taken as given, not recomputed. Unknown names are
    /// rejected so a renamed API field can't silently drop a figure.
    pub fn from_draft<I, K>(draft: I) -> Result<Self, DaftarError>
    where
        I: IntoIterator<Item = (K, Decimal)>,
        K: AsRef<str>,
    {
        let mut ret = Self::default();
        for (name, value) in draft {
            let field: Vat201Field = name.as_ref().parse()?;
            *ret.slot_mut(field) = bounded_amount(value);
        }
        Ok(ret)
    }

    /// Figures of one box.
    pub fn entry(&self, vat_box: VatBox) -> &BoxEntry {
        match vat_box {
            VatBox::StandardRated(e) => &self.standard_rated[e.index()],
            VatBox::TouristRefund => &self.tourist_refund,
            VatBox::ReverseCharge => &self.reverse_charge,
            VatBox::ZeroRated => &self.zero_rated,
            VatBox::Exempt => &self.exempt,
            VatBox::Imports => &self.imports,
            VatBox::ImportsAdjustment => &self.imports_adjustment,
            VatBox::Expenses => &self.expenses,
            VatBox::ExpensesReverseCharge => &self.expenses_reverse_charge,
        }
    }

    fn entry_mut(&mut self, vat_box: VatBox) -> &mut BoxEntry {
        match vat_box {
            VatBox::StandardRated(e) => &mut self.standard_rated[e.index()],
            VatBox::TouristRefund => &mut self.tourist_refund,
            VatBox::ReverseCharge => &mut self.reverse_charge,
            VatBox::ZeroRated => &mut self.zero_rated,
            VatBox::Exempt => &mut self.exempt,
            VatBox::Imports => &mut self.imports,
            VatBox::ImportsAdjustment => &mut self.imports_adjustment,
            VatBox::Expenses => &mut self.expenses,
            VatBox::ExpensesReverseCharge => &mut self.expenses_reverse_charge,
        }
    }

    fn slot_mut(&mut self, field: Vat201Field) -> &mut Decimal {
        let entry = self.entry_mut(field.vat_box());
        match field.kind() {
            FieldKind::Amount => &mut entry.amount,
            FieldKind::Vat => &mut entry.vat,
            FieldKind::Adjustment => &mut entry.adjustment,
        }
    }

    /// Current value of a field.
    pub fn get(&self, field: Vat201Field) -> Decimal {
        let entry = self.entry(field.vat_box());
        match field.kind() {
            FieldKind::Amount => entry.amount,
            FieldKind::Vat => entry.vat,
            FieldKind::Adjustment => entry.adjustment,
        }
    }

    /// Apply a raw form input. Unparseable input counts as zero.
    pub fn update(&mut self, field: Vat201Field, raw: &str) {
        self.set(field, parse_amount(raw));
    }

    /// Apply a raw form input addressed by its flat field name.
    pub fn update_named(&mut self, name: &str, raw: &str) -> Result<(), DaftarError> {
        let field: Vat201Field = name.parse()?;
        self.update(field, raw);
        Ok(())
    }

    /// Set a field to an already-parsed value, recomputing VAT when an amount changes.
    ///
    /// Values beyond [`MAX_AMOUNT`](crate::core::MAX_AMOUNT) count as zero.
    pub fn set(&mut self, field: Vat201Field, value: Decimal) {
        let value = bounded_amount(value);
        let vat_box = field.vat_box();
        let entry = self.entry_mut(vat_box);
        match field.kind() {
            FieldKind::Amount => {
                entry.amount = value;
                if vat_box.bears_vat() {
                    entry.vat = standard_vat(value);
                    log::trace!("box {} vat recomputed: {}", vat_box.number(), entry.vat);
                }
            }
            FieldKind::Vat => entry.vat = value,
            FieldKind::Adjustment => entry.adjustment = value,
        }
    }

    fn output_boxes(&self) -> impl Iterator<Item = (VatBox, &BoxEntry)> {
        VatBox::all()
            .filter(|b| b.is_output())
            .map(move |b| (b, self.entry(b)))
    }

    /// Box 8 amount: every output-side amount including zero rated and exempt supplies.
    pub fn total_sales_amount(&self) -> Decimal {
        saturating_sum(self.output_boxes().map(|(_, e)| e.amount))
    }

    /// Box 8 VAT: output tax. Zero rated and exempt contribute nothing.
    pub fn total_sales_vat(&self) -> Decimal {
        saturating_sum(
            self.output_boxes()
                .filter(|(b, _)| b.bears_vat())
                .map(|(_, e)| e.vat),
        )
    }

    /// Box 8 adjustment: sum of the emirate adjustments only.
    pub fn total_sales_adjustment(&self) -> Decimal {
        saturating_sum(self.standard_rated.iter().map(|e| e.adjustment))
    }

    /// Box 11 amount.
    pub fn total_expenses_amount(&self) -> Decimal {
        saturating_sum([self.expenses.amount, self.expenses_reverse_charge.amount])
    }

    /// Box 11 VAT: recoverable input tax.
    pub fn total_input_vat(&self) -> Decimal {
        saturating_sum([self.expenses.vat, self.expenses_reverse_charge.vat])
    }

    /// Box 11 adjustment.
    pub fn total_expenses_adjustment(&self) -> Decimal {
        self.expenses.adjustment
    }

    /// Output tax minus input tax. Non-negative is payable, negative refundable.
    pub fn net_vat(&self) -> Decimal {
        self.total_sales_vat()
            .saturating_sub(self.total_input_vat())
    }

    /// Net VAT as a payable/refundable position.
    pub fn net_position(&self) -> NetVatPosition {
        NetVatPosition::from_net(self.net_vat())
    }

    /// Statutory totals (boxes 8 and 11-14).
    pub fn summary(&self) -> Vat201Summary {
        let due = self.total_sales_vat();
        let recoverable = self.total_input_vat();
        Vat201Summary {
            box8: BoxEntry {
                amount: self.total_sales_amount(),
                vat: due,
                adjustment: self.total_sales_adjustment(),
            },
            box11: BoxEntry {
                amount: self.total_expenses_amount(),
                vat: recoverable,
                adjustment: self.total_expenses_adjustment(),
            },
            box12_total_due: due,
            box13_recoverable: recoverable,
            box14_net: NetVatPosition::from_net(due.saturating_sub(recoverable)),
        }
    }

    /// Every field with its value, in form order, using the flat field names.
    pub fn to_fields(&self) -> Vec<(String, Decimal)> {
        Vat201Field::all()
            .map(|f| (f.to_string(), self.get(f)))
            .collect()
    }

    /// Figures of an emirate's box 1 line.
    pub fn emirate(&self, emirate: Emirate) -> &BoxEntry {
        &self.standard_rated[emirate.index()]
    }
}

/// Derived totals of a return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vat201Summary {
    /// Box 8: totals of the output boxes.
    pub box8: BoxEntry,
    /// Box 11: totals of the input boxes.
    pub box11: BoxEntry,
    /// Box 12: total value of due tax for the period.
    pub box12_total_due: Decimal,
    /// Box 13: total value of recoverable tax for the period.
    pub box13_recoverable: Decimal,
    /// Box 14: payable or refundable tax for the period.
    pub box14_net: NetVatPosition,
}

/// Net VAT shown as an absolute amount with a direction.
///
/// A net of exactly zero is payable (nothing owed either way, but never
/// labelled as a refund).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetVatPosition {
    Payable(Decimal),
    Refundable(Decimal),
}

impl NetVatPosition {
    pub fn from_net(net: Decimal) -> Self {
        if net.is_sign_negative() && !net.is_zero() {
            Self::Refundable(-net)
        } else {
            Self::Payable(net.abs())
        }
    }

    /// Absolute amount, never negative.
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Payable(a) | Self::Refundable(a) => *a,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Payable(_) => "Payable",
            Self::Refundable(_) => "Refundable",
        }
    }

    pub fn is_refund(&self) -> bool {
        matches!(self, Self::Refundable(_))
    }

    /// Signed net: positive payable, negative refundable.
    pub fn signed(&self) -> Decimal {
        match self {
            Self::Payable(a) => *a,
            Self::Refundable(a) => -*a,
        }
    }
}

impl fmt::Display for NetVatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            format_currency(self.amount(), DEFAULT_CURRENCY),
            self.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> Vat201Field {
        name.parse().unwrap()
    }

    #[test]
    fn amount_edit_derives_vat() {
        let mut r = Vat201Return::default();
        r.update(field("box1bDubaiAmount"), "2499.90");
        assert_eq!(r.emirate(Emirate::Dubai).vat, dec!(125.00));
    }

    #[test]
    fn vat_rounds_half_up() {
        // 0.05 * 0.30 = 0.015
        assert_eq!(standard_vat(dec!(0.30)), dec!(0.02));
        assert_eq!(standard_vat(dec!(10.10)), dec!(0.51));
    }

    #[test]
    fn manual_vat_persists_until_amount_changes() {
        let mut r = Vat201Return::default();
        r.update(field("importsAmount"), "1000");
        r.update(field("importsVat"), "42");
        assert_eq!(r.imports.vat, dec!(42));
        r.update(field("importsAdjAmount"), "10");
        assert_eq!(r.imports.vat, dec!(42));
        r.update(field("importsAmount"), "2000");
        assert_eq!(r.imports.vat, dec!(100.00));
    }

    #[test]
    fn adjustment_does_not_touch_vat() {
        let mut r = Vat201Return::default();
        r.update(field("box1cSharjahAmount"), "100");
        r.update(field("box1cSharjahAdjustment"), "-3");
        assert_eq!(r.emirate(Emirate::Sharjah).vat, dec!(5.00));
        assert_eq!(r.total_sales_adjustment(), dec!(-3));
    }

    #[test]
    fn zero_rated_never_gets_vat() {
        let mut r = Vat201Return::default();
        r.update(field("zeroRatedAmount"), "5000");
        r.update(field("exemptAmount"), "700");
        assert_eq!(r.zero_rated.vat, Decimal::ZERO);
        assert_eq!(r.exempt.vat, Decimal::ZERO);
        assert_eq!(r.total_sales_amount(), dec!(5700));
        assert_eq!(r.total_sales_vat(), Decimal::ZERO);
    }

    #[test]
    fn stray_vat_on_exempt_boxes_ignored() {
        let mut r = Vat201Return::default();
        r.update(field("zeroRatedAmount"), "1000");
        r.zero_rated.vat = dec!(50);
        r.exempt.vat = dec!(20);
        assert_eq!(r.total_sales_vat(), Decimal::ZERO);
        assert_eq!(r.summary().box12_total_due, Decimal::ZERO);
    }

    #[test]
    fn oversized_amount_is_unusable() {
        let mut r = Vat201Return::default();
        r.update(field("box1aAbuDhabiAmount"), "20000000000000000000000000000");
        assert_eq!(r.emirate(Emirate::AbuDhabi).amount, Decimal::ZERO);
        assert_eq!(r.emirate(Emirate::AbuDhabi).vat, Decimal::ZERO);

        r.set(field("importsAmount"), Decimal::MAX);
        assert_eq!(r.imports.amount, Decimal::ZERO);
        assert_eq!(r.imports.vat, Decimal::ZERO);
    }

    #[test]
    fn largest_amount_still_computes() {
        let mut r = Vat201Return::default();
        for emirate in Emirate::ALL {
            r.set(Vat201Field::amount(VatBox::StandardRated(emirate)), crate::core::MAX_AMOUNT);
        }
        assert_eq!(r.emirate(Emirate::Dubai).vat, dec!(50000000000000));
        assert_eq!(r.total_sales_vat(), dec!(350000000000000));
    }

    #[test]
    fn standard_vat_overflow_is_zero() {
        assert_eq!(standard_vat(Decimal::MAX), Decimal::ZERO);
    }

    #[test]
    fn totals_clamp_on_deserialised_extremes() {
        let mut r = Vat201Return::default();
        r.expenses.vat = Decimal::MAX;
        r.expenses_reverse_charge.vat = Decimal::MAX;
        r.imports.vat = Decimal::MIN;
        assert_eq!(r.total_input_vat(), Decimal::MAX);
        assert_eq!(r.net_vat(), Decimal::MIN);
        assert!(r.net_position().is_refund());
    }

    #[test]
    fn garbage_input_is_zero() {
        let mut r = Vat201Return::default();
        r.update(field("expensesAmount"), "abc");
        assert_eq!(r.expenses.amount, Decimal::ZERO);
        assert_eq!(r.expenses.vat, Decimal::ZERO);
    }

    #[test]
    fn net_zero_is_payable() {
        let p = NetVatPosition::from_net(Decimal::ZERO);
        assert_eq!(p.label(), "Payable");
        assert_eq!(p.amount(), Decimal::ZERO);
        let p = NetVatPosition::from_net(dec!(-0.00));
        assert_eq!(p.label(), "Payable");
    }

    #[test]
    fn negative_net_is_refundable_absolute() {
        let p = NetVatPosition::from_net(dec!(-250.50));
        assert!(p.is_refund());
        assert_eq!(p.amount(), dec!(250.50));
        assert_eq!(p.signed(), dec!(-250.50));
        assert_eq!(p.to_string(), "AED 250.50 Refundable");
    }

    #[test]
    fn draft_keeps_server_vat() {
        let r = Vat201Return::from_draft([
            ("box1aAbuDhabiAmount", dec!(1000)),
            ("box1aAbuDhabiVat", dec!(49.99)),
        ])
        .unwrap();
        assert_eq!(r.emirate(Emirate::AbuDhabi).vat, dec!(49.99));
    }

    #[test]
    fn draft_rejects_unknown_field() {
        let err = Vat201Return::from_draft([("box99Amount", dec!(1))]).unwrap_err();
        assert!(matches!(err, DaftarError::UnknownField(_)));
    }

    #[test]
    fn to_fields_covers_form() {
        let r = Vat201Return::default();
        let fields = r.to_fields();
        assert_eq!(fields.len(), 36);
        assert_eq!(fields[0].0, "box1aAbuDhabiAmount");
    }
}
