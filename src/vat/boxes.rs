//! Boxes and field names of the FTA VAT 201 return.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::DaftarError;

/// The seven emirates, in the order of boxes 1a to 1g.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Emirate {
    AbuDhabi,
    Dubai,
    Sharjah,
    Ajman,
    UmmAlQuwain,
    RasAlKhaimah,
    Fujairah,
}

impl Emirate {
    /// All emirates in box order.
    pub const ALL: [Emirate; 7] = [
        Self::AbuDhabi,
        Self::Dubai,
        Self::Sharjah,
        Self::Ajman,
        Self::UmmAlQuwain,
        Self::RasAlKhaimah,
        Self::Fujairah,
    ];

    /// Letter suffix of the box (`a` for Abu Dhabi through `g` for Fujairah).
    pub fn box_letter(&self) -> char {
        match self {
            Self::AbuDhabi => 'a',
            Self::Dubai => 'b',
            Self::Sharjah => 'c',
            Self::Ajman => 'd',
            Self::UmmAlQuwain => 'e',
            Self::RasAlKhaimah => 'f',
            Self::Fujairah => 'g',
        }
    }

    /// Name as printed on the return.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AbuDhabi => "Abu Dhabi",
            Self::Dubai => "Dubai",
            Self::Sharjah => "Sharjah",
            Self::Ajman => "Ajman",
            Self::UmmAlQuwain => "Umm Al Quwain",
            Self::RasAlKhaimah => "Ras Al Khaimah",
            Self::Fujairah => "Fujairah",
        }
    }

    /// Position in [`Emirate::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    fn camel_name(&self) -> &'static str {
        match self {
            Self::AbuDhabi => "AbuDhabi",
            Self::Dubai => "Dubai",
            Self::Sharjah => "Sharjah",
            Self::Ajman => "Ajman",
            Self::UmmAlQuwain => "UmmAlQuwain",
            Self::RasAlKhaimah => "RasAlKhaimah",
            Self::Fujairah => "Fujairah",
        }
    }
}

/// A numbered line of the VAT 201 return that accepts input.
///
/// Boxes 8 and 11 to 14 are totals and are never edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VatBox {
    /// Box 1a-1g: standard rated supplies in an emirate.
    StandardRated(Emirate),
    /// Box 2: tax refunds provided to tourists.
    TouristRefund,
    /// Box 3: supplies subject to the reverse charge.
    ReverseCharge,
    /// Box 4: zero rated supplies.
    ZeroRated,
    /// Box 5: exempt supplies.
    Exempt,
    /// Box 6: goods imported into the UAE.
    Imports,
    /// Box 7: adjustments to goods imported into the UAE.
    ImportsAdjustment,
    /// Box 9: standard rated expenses.
    Expenses,
    /// Box 10: supplies subject to the reverse charge (input side).
    ExpensesReverseCharge,
}

impl VatBox {
    /// Every input box in form order.
    pub fn all() -> impl Iterator<Item = VatBox> {
        Emirate::ALL
            .into_iter()
            .map(VatBox::StandardRated)
            .chain([
                Self::TouristRefund,
                Self::ReverseCharge,
                Self::ZeroRated,
                Self::Exempt,
                Self::Imports,
                Self::ImportsAdjustment,
                Self::Expenses,
                Self::ExpensesReverseCharge,
            ])
    }

    /// Box label as printed, e.g. `1a`, `5`, `10`.
    pub fn number(&self) -> String {
        match self {
            Self::StandardRated(e) => format!("1{}", e.box_letter()),
            Self::TouristRefund => "2".into(),
            Self::ReverseCharge => "3".into(),
            Self::ZeroRated => "4".into(),
            Self::Exempt => "5".into(),
            Self::Imports => "6".into(),
            Self::ImportsAdjustment => "7".into(),
            Self::Expenses => "9".into(),
            Self::ExpensesReverseCharge => "10".into(),
        }
    }

    /// Whether the box carries a VAT column. Zero rated and exempt supplies never do.
    pub fn bears_vat(&self) -> bool {
        !matches!(self, Self::ZeroRated | Self::Exempt)
    }

    /// Whether the box carries a free-entry adjustment column.
    pub fn has_adjustment(&self) -> bool {
        matches!(self, Self::StandardRated(_) | Self::Expenses)
    }

    /// Whether the box belongs to the output (sales) side of the return.
    pub fn is_output(&self) -> bool {
        !matches!(self, Self::Expenses | Self::ExpensesReverseCharge)
    }

    /// Prefix shared by the box's field names, e.g. `box1aAbuDhabi`, `imports`.
    pub fn field_prefix(&self) -> String {
        match self {
            Self::StandardRated(e) => format!("box1{}{}", e.box_letter(), e.camel_name()),
            Self::TouristRefund => "touristRefund".into(),
            Self::ReverseCharge => "reverseCharge".into(),
            Self::ZeroRated => "zeroRated".into(),
            Self::Exempt => "exempt".into(),
            Self::Imports => "imports".into(),
            Self::ImportsAdjustment => "importsAdj".into(),
            Self::Expenses => "expenses".into(),
            Self::ExpensesReverseCharge => "expensesReverseCharge".into(),
        }
    }

    /// Form description of the box.
    pub fn description(&self) -> String {
        match self {
            Self::StandardRated(e) => format!("Standard rated supplies in {}", e.name()),
            Self::TouristRefund => "Tax refunds provided to tourists under the Tax Refunds for Tourists Scheme".into(),
            Self::ReverseCharge => "Supplies subject to the reverse charge provisions".into(),
            Self::ZeroRated => "Zero rated supplies".into(),
            Self::Exempt => "Exempt supplies".into(),
            Self::Imports => "Goods imported into the UAE".into(),
            Self::ImportsAdjustment => "Adjustments to goods imported into the UAE".into(),
            Self::Expenses => "Standard rated expenses".into(),
            Self::ExpensesReverseCharge => "Supplies subject to the reverse charge provisions".into(),
        }
    }
}

/// Column of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Amount,
    Vat,
    Adjustment,
}

impl FieldKind {
    fn suffix(&self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::Vat => "Vat",
            Self::Adjustment => "Adjustment",
        }
    }
}

/// One editable input on the form: a box plus a column that box actually has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vat201Field {
    vat_box: VatBox,
    kind: FieldKind,
}

impl Vat201Field {
    /// Combine a box and column, rejecting columns the box does not have.
    pub fn new(vat_box: VatBox, kind: FieldKind) -> Result<Self, DaftarError> {
        let ok = match kind {
            FieldKind::Amount => true,
            FieldKind::Vat => vat_box.bears_vat(),
            FieldKind::Adjustment => vat_box.has_adjustment(),
        };
        if !ok {
            return Err(DaftarError::InvalidField(format!(
                "box {} has no {} column",
                vat_box.number(),
                kind.suffix().to_lowercase()
            )));
        }
        Ok(Self { vat_box, kind })
    }

    /// Amount column of a box; every box has one.
    pub fn amount(vat_box: VatBox) -> Self {
        Self {
            vat_box,
            kind: FieldKind::Amount,
        }
    }

    pub fn vat_box(&self) -> VatBox {
        self.vat_box
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Every field of the form in form order.
    pub fn all() -> impl Iterator<Item = Vat201Field> {
        VatBox::all().flat_map(|b| {
            [FieldKind::Amount, FieldKind::Vat, FieldKind::Adjustment]
                .into_iter()
                .filter_map(move |k| Vat201Field::new(b, k).ok())
        })
    }
}

impl fmt::Display for Vat201Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.vat_box.field_prefix(), self.kind.suffix())
    }
}

impl FromStr for Vat201Field {
    type Err = DaftarError;

    /// Parse a flat form field name such as `box1aAbuDhabiAmount` or `zeroRatedAmount`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vat201Field::all()
            .find(|f| f.to_string() == s)
            .ok_or_else(|| match s.strip_suffix("Vat") {
                Some(prefix) if VatBox::all().any(|b| b.field_prefix() == prefix) => {
                    DaftarError::InvalidField(format!("'{s}' is not a VAT-bearing field"))
                }
                _ => DaftarError::UnknownField(s.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_match_form() {
        let f = Vat201Field::amount(VatBox::StandardRated(Emirate::AbuDhabi));
        assert_eq!(f.to_string(), "box1aAbuDhabiAmount");
        let f = Vat201Field::new(VatBox::StandardRated(Emirate::Fujairah), FieldKind::Adjustment)
            .unwrap();
        assert_eq!(f.to_string(), "box1gFujairahAdjustment");
        let f = Vat201Field::new(VatBox::ImportsAdjustment, FieldKind::Vat).unwrap();
        assert_eq!(f.to_string(), "importsAdjVat");
    }

    #[test]
    fn parse_round_trips_every_field() {
        for field in Vat201Field::all() {
            assert_eq!(field.to_string().parse::<Vat201Field>().unwrap(), field);
        }
    }

    #[test]
    fn form_has_expected_field_count() {
        // 7 emirates x 3 columns, boxes 2/3/6/7/10 x 2, boxes 4/5 x 1, box 9 x 3
        assert_eq!(Vat201Field::all().count(), 21 + 10 + 2 + 3);
    }

    #[test]
    fn zero_rated_and_exempt_have_no_vat() {
        assert!(Vat201Field::new(VatBox::ZeroRated, FieldKind::Vat).is_err());
        assert!(Vat201Field::new(VatBox::Exempt, FieldKind::Vat).is_err());
        assert!(matches!(
            "zeroRatedVat".parse::<Vat201Field>(),
            Err(DaftarError::InvalidField(_))
        ));
    }

    #[test]
    fn unknown_name_rejected() {
        assert!(matches!(
            "box8Amount".parse::<Vat201Field>(),
            Err(DaftarError::UnknownField(_))
        ));
        assert!("importsAdjustment".parse::<Vat201Field>().is_err());
    }

    #[test]
    fn box_numbers() {
        assert_eq!(VatBox::StandardRated(Emirate::RasAlKhaimah).number(), "1f");
        assert_eq!(VatBox::ExpensesReverseCharge.number(), "10");
        assert!(!VatBox::Expenses.is_output());
        assert!(VatBox::Imports.is_output());
    }
}
