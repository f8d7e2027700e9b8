//! # Money Module
//!
//! Provides the `Money` type for cart totals and the theme's money-format
//! templates for display.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The storefront cart API already answers in integer cents:              │
//! │    { "total_price": 1999, "item_count": 1 }                             │
//! │                                                                         │
//! │  OUR SOLUTION: keep cents end to end, convert only for display         │
//! │    1999 ──► MoneyFormat("${{amount}}") ──► "$19.99"                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Money Format Templates
//! ```text
//! ┌──────────────────────────────────────────┬───────────┬──────────┬─────────┐
//! │ Placeholder                              │ Precision │ Thousands│ Decimal │
//! ├──────────────────────────────────────────┼───────────┼──────────┼─────────┤
//! │ {{amount}}                               │ 2         │ ,        │ .       │
//! │ {{amount_no_decimals}}                   │ 0         │ ,        │         │
//! │ {{amount_with_comma_separator}}          │ 2         │ .        │ ,       │
//! │ {{amount_no_decimals_with_comma_separator}} │ 0      │ .        │         │
//! │ {{amount_no_decimals_with_space_separator}} │ 0      │ (space)  │         │
//! │ {{amount_with_apostrophe_separator}}     │ 2         │ '        │ .       │
//! └──────────────────────────────────────────┴───────────┴──────────┴─────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use aurora_core::money::{format_money, Money, MoneyFormat};
//!
//! let total = Money::from_cents(1_000_000);
//! let format = MoneyFormat::parse("${{amount}}").unwrap();
//! assert_eq!(total.format_with(&format), "$10,000.00");
//!
//! // Price strings from theme markup: the first '.' is dropped, so
//! // "19.99" means 1999 cents, not nineteen point nine nine cents.
//! assert_eq!(format_money("19.99", "${{amount}}").unwrap(), "$19.99");
//! ```

use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: cart discounts can push line values negative
/// - **Single field tuple struct**: serializes as the bare integer the cart
///   API sends (`"total_price": 1999`)
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  /cart.js response                                                      │
/// │    items[].price ──────┐                                                │
/// │    items[].line_price ─┼──► Money ──► MoneyFormat ──► "$19.99" badge    │
/// │    total_price ────────┘                                                │
/// │                                                                         │
/// │  The client never sums these itself: the server's numbers are final.   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use aurora_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Renders this value with a theme money format.
    ///
    /// ## Example
    /// ```rust
    /// use aurora_core::money::{Money, MoneyFormat};
    ///
    /// let euro = MoneyFormat::parse("{{amount_with_comma_separator}} €").unwrap();
    /// assert_eq!(Money::from_cents(123456).format_with(&euro), "1.234,56 €");
    /// ```
    pub fn format_with(&self, format: &MoneyFormat) -> String {
        format.format(*self)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. Storefront display goes through
/// [`MoneyFormat`] so the shop's configured template is honoured.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Amount Input
// =============================================================================

/// Anything the theme may hand to the formatter as an amount in cents.
///
/// ## Coercion Rules
/// ```text
/// Cents(1999)         ──► 1999
/// Number(1999.0)      ──► 1999
/// Text("19.99")       ──► strip FIRST '.' ──► "1999" ──► 1999
/// Text("1.234.56")    ──► "1234.56" ──► 1234.56 cents (only one '.' removed)
/// Text(""), Text(" ") ──► 0
/// Text("abc")         ──► NaN ──► 0
/// Text("1_000")       ──► NaN ──► 0 (no digit separators)
/// Text("1e30")        ──► beyond Decimal range ──► formatted from f64
/// Number(NaN)/Missing ──► 0
/// ```
///
/// The string rule is a long-standing quirk of theme markup (prices rendered
/// as `"19.99"` are really cent counts). It is kept as-is: callers depend on it.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    /// Integer minor units.
    Cents(i64),
    /// A JSON/JS number of minor units, possibly fractional or NaN.
    Number(f64),
    /// A numeric string; its first `.` is removed before parsing.
    Text(String),
    /// `null` / absent.
    Missing,
}

/// Minor units resolved from an [`Amount`].
#[derive(Debug, Clone, Copy, PartialEq)]
enum MinorUnits {
    /// Within `Decimal` range: rounded exactly.
    Exact(Decimal),
    /// Beyond `Decimal` range. Every such `f64` is a whole number, so float
    /// formatting loses nothing the input still had.
    Wide(f64),
}

impl MinorUnits {
    fn from_f64(n: f64) -> Option<Self> {
        if !n.is_finite() {
            return None;
        }
        Some(match Decimal::from_f64(n) {
            Some(exact) => MinorUnits::Exact(exact),
            None => MinorUnits::Wide(n),
        })
    }

    /// Major units with exactly `precision` fraction digits, as `toFixed` would.
    fn to_fixed(self, precision: u32) -> String {
        match self {
            MinorUnits::Exact(minor) => {
                let major = (minor / Decimal::ONE_HUNDRED)
                    .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
                format!("{:.*}", precision as usize, major)
            }
            MinorUnits::Wide(minor) => format!("{:.*}", precision as usize, minor / 100.0),
        }
    }
}

impl Amount {
    /// Resolves the amount to minor units, or `None` when it is NaN-like.
    fn minor_units(&self) -> Option<MinorUnits> {
        match self {
            Amount::Cents(cents) => Some(MinorUnits::Exact(Decimal::from(*cents))),
            Amount::Number(n) => MinorUnits::from_f64(*n),
            Amount::Missing => None,
            Amount::Text(text) => {
                let normalized = text.replacen('.', "", 1);
                let trimmed = normalized.trim();
                if trimmed.is_empty() {
                    return Some(MinorUnits::Exact(Decimal::ZERO));
                }
                // Decimal accepts digit separators; a numeric string does not
                if trimmed.contains('_') {
                    return None;
                }
                match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
                    Ok(exact) => Some(MinorUnits::Exact(exact)),
                    Err(_) => trimmed.parse::<f64>().ok().and_then(MinorUnits::from_f64),
                }
            }
        }
    }
}

impl From<i64> for Amount {
    fn from(cents: i64) -> Self {
        Amount::Cents(cents)
    }
}

impl From<i32> for Amount {
    fn from(cents: i32) -> Self {
        Amount::Cents(i64::from(cents))
    }
}

impl From<f64> for Amount {
    fn from(n: f64) -> Self {
        Amount::Number(n)
    }
}

impl From<Money> for Amount {
    fn from(money: Money) -> Self {
        Amount::Cents(money.cents())
    }
}

impl From<&str> for Amount {
    fn from(text: &str) -> Self {
        Amount::Text(text.to_string())
    }
}

impl From<String> for Amount {
    fn from(text: String) -> Self {
        Amount::Text(text)
    }
}

impl<T: Into<Amount>> From<Option<T>> for Amount {
    fn from(value: Option<T>) -> Self {
        value.map_or(Amount::Missing, Into::into)
    }
}

// =============================================================================
// Format Variants
// =============================================================================

/// The placeholder names a money template may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVariant {
    /// `1,234.56`
    Amount,
    /// `1,235`
    AmountNoDecimals,
    /// `1.234,56`
    AmountWithCommaSeparator,
    /// `1.235`
    AmountNoDecimalsWithCommaSeparator,
    /// `1 235`
    AmountNoDecimalsWithSpaceSeparator,
    /// `1'234.56`
    AmountWithApostropheSeparator,
}

impl FormatVariant {
    /// All recognized variants.
    pub const ALL: [FormatVariant; 6] = [
        FormatVariant::Amount,
        FormatVariant::AmountNoDecimals,
        FormatVariant::AmountWithCommaSeparator,
        FormatVariant::AmountNoDecimalsWithCommaSeparator,
        FormatVariant::AmountNoDecimalsWithSpaceSeparator,
        FormatVariant::AmountWithApostropheSeparator,
    ];

    /// Looks up a variant by its placeholder name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }

    /// The placeholder name as written inside `{{ }}`.
    pub const fn name(&self) -> &'static str {
        match self {
            FormatVariant::Amount => "amount",
            FormatVariant::AmountNoDecimals => "amount_no_decimals",
            FormatVariant::AmountWithCommaSeparator => "amount_with_comma_separator",
            FormatVariant::AmountNoDecimalsWithCommaSeparator => {
                "amount_no_decimals_with_comma_separator"
            }
            FormatVariant::AmountNoDecimalsWithSpaceSeparator => {
                "amount_no_decimals_with_space_separator"
            }
            FormatVariant::AmountWithApostropheSeparator => "amount_with_apostrophe_separator",
        }
    }

    /// Digits kept after the decimal separator.
    pub const fn precision(&self) -> u32 {
        match self {
            FormatVariant::Amount
            | FormatVariant::AmountWithCommaSeparator
            | FormatVariant::AmountWithApostropheSeparator => 2,
            FormatVariant::AmountNoDecimals
            | FormatVariant::AmountNoDecimalsWithCommaSeparator
            | FormatVariant::AmountNoDecimalsWithSpaceSeparator => 0,
        }
    }

    /// Separator inserted between groups of three integer digits.
    pub const fn thousands_separator(&self) -> char {
        match self {
            FormatVariant::Amount | FormatVariant::AmountNoDecimals => ',',
            FormatVariant::AmountWithCommaSeparator
            | FormatVariant::AmountNoDecimalsWithCommaSeparator => '.',
            FormatVariant::AmountNoDecimalsWithSpaceSeparator => ' ',
            FormatVariant::AmountWithApostropheSeparator => '\'',
        }
    }

    /// Separator between the integer and fractional parts.
    pub const fn decimal_separator(&self) -> char {
        match self {
            FormatVariant::AmountWithCommaSeparator
            | FormatVariant::AmountNoDecimalsWithCommaSeparator => ',',
            _ => '.',
        }
    }

    /// Formats minor units as a major-unit string, without the template.
    ///
    /// NaN-like amounts render as zero. A value that rounds to zero never
    /// carries a minus sign: `-1` cent with no decimals renders `"0"`, not
    /// `"-0"`.
    pub fn render(&self, amount: &Amount) -> String {
        let precision = self.precision();
        let fixed = amount
            .minor_units()
            .unwrap_or(MinorUnits::Exact(Decimal::ZERO))
            .to_fixed(precision);

        let (mut sign, unsigned) = match fixed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", fixed.as_str()),
        };
        if unsigned.chars().all(|c| c == '0' || c == '.') {
            sign = "";
        }
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
        out.push_str(sign);
        out.push_str(&group_thousands(whole, self.thousands_separator()));
        if !fraction.is_empty() {
            out.push(self.decimal_separator());
            out.push_str(fraction);
        }
        out
    }
}

impl fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inserts `sep` every three digits counting from the right.
fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Money Format Template
// =============================================================================

/// `{{ name }}`, whitespace allowed inside the braces.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("placeholder pattern is a valid regex")
});

/// A parsed money template such as `"${{amount}}"` or `"{{amount_with_comma_separator}} €"`.
///
/// Parsing locates the first placeholder once; formatting splices the
/// rendered amount into that position. Everything outside the placeholder is
/// copied through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MoneyFormat {
    template: String,
    variant: FormatVariant,
    placeholder: Range<usize>,
}

impl MoneyFormat {
    /// The storefront default when a shop configures nothing.
    pub const DEFAULT_TEMPLATE: &'static str = "${{amount}}";

    /// Parses a template.
    ///
    /// ## Errors
    /// - [`FormatError::MissingPlaceholder`] when no `{{ name }}` is present
    /// - [`FormatError::UnknownPlaceholder`] when the first one is not a known variant
    pub fn parse(template: &str) -> Result<Self, FormatError> {
        let captures =
            PLACEHOLDER
                .captures(template)
                .ok_or_else(|| FormatError::MissingPlaceholder {
                    template: template.to_string(),
                })?;

        // Group 0 always exists on a successful match, group 1 is mandatory in the pattern.
        let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
            return Err(FormatError::MissingPlaceholder {
                template: template.to_string(),
            });
        };

        let variant =
            FormatVariant::from_name(name.as_str()).ok_or_else(|| FormatError::UnknownPlaceholder {
                name: name.as_str().to_string(),
                template: template.to_string(),
            })?;

        Ok(MoneyFormat {
            template: template.to_string(),
            variant,
            placeholder: whole.range(),
        })
    }

    /// The template text as given.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The variant named by the placeholder.
    pub fn variant(&self) -> FormatVariant {
        self.variant
    }

    /// Formats an amount (in minor units) into the template.
    pub fn format(&self, amount: impl Into<Amount>) -> String {
        let value = self.variant.render(&amount.into());
        let mut out = String::with_capacity(self.template.len() + value.len());
        out.push_str(&self.template[..self.placeholder.start]);
        out.push_str(&value);
        out.push_str(&self.template[self.placeholder.end..]);
        out
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        MoneyFormat {
            template: Self::DEFAULT_TEMPLATE.to_string(),
            variant: FormatVariant::Amount,
            placeholder: 1..Self::DEFAULT_TEMPLATE.len(),
        }
    }
}

impl FromStr for MoneyFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoneyFormat::parse(s)
    }
}

impl TryFrom<String> for MoneyFormat {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        MoneyFormat::parse(&value)
    }
}

impl From<MoneyFormat> for String {
    fn from(format: MoneyFormat) -> Self {
        format.template
    }
}

impl fmt::Display for MoneyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

/// One-shot formatting: parse `template`, then format `amount` into it.
///
/// ## Example
/// ```rust
/// use aurora_core::money::{format_money, Amount};
///
/// assert_eq!(format_money(1999, "${{amount}}").unwrap(), "$19.99");
/// assert_eq!(format_money(1999, "${{amount_no_decimals}}").unwrap(), "$20");
/// assert_eq!(format_money(Amount::Missing, "${{amount}}").unwrap(), "$0.00");
/// assert!(format_money(1999, "$").is_err());
/// ```
pub fn format_money(amount: impl Into<Amount>, template: &str) -> Result<String, FormatError> {
    Ok(MoneyFormat::parse(template)?.format(amount))
}

// =============================================================================
// Unit Tests
// =============================================================================
