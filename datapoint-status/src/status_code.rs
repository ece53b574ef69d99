use std::fmt;

use crate::bits::{self, Flags};
use crate::{Category, ValidationError};

/// Coarse quality classification, the top two bits of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Severity {
    Good = 0,
    Uncertain = 1,
    Bad = 2,
}

impl Severity {
    pub const fn from_bits(bits: u32) -> Option<Severity> {
        match bits {
            0 => Some(Severity::Good),
            1 => Some(Severity::Uncertain),
            2 => Some(Severity::Bad),
            _ => None,
        }
    }
}

/// Whether the value sits at, or was clamped to, a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Limit {
    #[default]
    None = 0,
    Low = 1,
    High = 2,
    Constant = 3,
}

impl Limit {
    pub const fn from_bits(bits: u32) -> Limit {
        match bits & 0b11 {
            0 => Limit::None,
            1 => Limit::Low,
            2 => Limit::High,
            _ => Limit::Constant,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Limit::None => "None",
            Limit::Low => "Low",
            Limit::High => "High",
            Limit::Constant => "Constant",
        }
    }
}

/// How the value was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum ValueType {
    #[default]
    Raw = 0,
    Calculated = 1,
    Interpolated = 2,
}

impl ValueType {
    pub const fn from_bits(bits: u32) -> Option<ValueType> {
        match bits {
            0 => Some(ValueType::Raw),
            1 => Some(ValueType::Calculated),
            2 => Some(ValueType::Interpolated),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ValueType::Raw => "Raw",
            ValueType::Calculated => "Calculated",
            ValueType::Interpolated => "Interpolated",
        }
    }
}

/// A packed 32-bit datapoint status code.
///
/// Instances obtained through [`StatusCode::try_create`],
/// [`StatusCode::parse`] or a [`Category`] always satisfy the structural
/// rules of the layout. [`StatusCode::from_raw_unchecked`] (and the wire
/// decoder, which uses it) admits any word so that codes produced by a
/// newer server survive a round trip through this client unchanged.
///
/// The `with_*` methods only rewrite their own field and return the
/// updated copy. They can produce a word that [`StatusCode::validate`]
/// rejects, for example a limit without the info type bit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusCode(u32);

impl StatusCode {
    pub const GOOD: StatusCode = StatusCode::from_category(Category::Good);
    pub const UNCERTAIN: StatusCode = StatusCode::from_category(Category::Uncertain);
    pub const BAD: StatusCode = StatusCode::from_category(Category::Bad);

    pub const fn from_category(category: Category) -> StatusCode {
        StatusCode(category.value())
    }

    /// Admits `code` only if every structural rule of the layout holds.
    pub fn try_create(code: u32) -> Result<StatusCode, ValidationError> {
        match check(code) {
            Ok(()) => Ok(StatusCode(code)),
            Err(e) => {
                tracing::trace!("rejected status code {code:#010X}: {e}");
                Err(e)
            }
        }
    }

    /// Wraps `code` without any validation.
    pub const fn from_raw_unchecked(code: u32) -> StatusCode {
        StatusCode(code)
    }

    /// Parses the textual form, e.g. `"Bad, Low"`.
    pub fn parse(symbol: &str) -> Result<StatusCode, ValidationError> {
        crate::symbol::parse(symbol)
    }

    /// Canonical textual form, the inverse of [`StatusCode::parse`].
    pub fn to_symbol(&self) -> String {
        self.to_string()
    }

    /// Re-checks the current word, typically after a chain of `with_*`
    /// calls.
    pub fn validate(self) -> Result<StatusCode, ValidationError> {
        StatusCode::try_create(self.0)
    }

    pub const fn code(self) -> u32 {
        self.0
    }

    pub const fn severity(self) -> Option<Severity> {
        Severity::from_bits(bits::severity(self.0))
    }

    pub const fn with_severity(self, severity: Severity) -> StatusCode {
        StatusCode(bits::with_severity(self.0, severity as u32))
    }

    pub const fn is_good(self) -> bool {
        matches!(self.severity(), Some(Severity::Good))
    }

    pub const fn is_uncertain(self) -> bool {
        matches!(self.severity(), Some(Severity::Uncertain))
    }

    pub const fn is_bad(self) -> bool {
        matches!(self.severity(), Some(Severity::Bad))
    }

    /// `None` when the category bits are not in the catalogue, which only
    /// happens for unchecked words.
    pub const fn category(self) -> Option<Category> {
        Category::from_value(bits::category(self.0))
    }

    pub const fn category_bits(self) -> u32 {
        bits::category(self.0)
    }

    pub const fn with_category(self, category: Category) -> StatusCode {
        StatusCode(bits::with_category(self.0, category.value()))
    }

    pub const fn flags(self) -> Flags {
        Flags::from_bits_truncate(self.0)
    }

    pub const fn structure_changed(self) -> bool {
        bits::flag(self.0, Flags::STRUCTURE_CHANGED)
    }

    pub const fn with_structure_changed(self, value: bool) -> StatusCode {
        StatusCode(bits::with_flag(self.0, Flags::STRUCTURE_CHANGED, value))
    }

    pub const fn semantics_changed(self) -> bool {
        bits::flag(self.0, Flags::SEMANTICS_CHANGED)
    }

    pub const fn with_semantics_changed(self, value: bool) -> StatusCode {
        StatusCode(bits::with_flag(self.0, Flags::SEMANTICS_CHANGED, value))
    }

    pub const fn is_data_value_info_type(self) -> bool {
        bits::flag(self.0, Flags::INFO_TYPE)
    }

    pub const fn with_data_value_info_type(self, value: bool) -> StatusCode {
        StatusCode(bits::with_flag(self.0, Flags::INFO_TYPE, value))
    }

    pub const fn limit(self) -> Limit {
        Limit::from_bits(bits::limit(self.0))
    }

    pub const fn with_limit(self, limit: Limit) -> StatusCode {
        StatusCode(bits::with_limit(self.0, limit as u32))
    }

    pub const fn overflow(self) -> bool {
        bits::flag(self.0, Flags::OVERFLOW)
    }

    pub const fn with_overflow(self, value: bool) -> StatusCode {
        StatusCode(bits::with_flag(self.0, Flags::OVERFLOW, value))
    }

    pub const fn multi_value(self) -> bool {
        bits::flag(self.0, Flags::MULTI_VALUE)
    }

    pub const fn with_multi_value(self, value: bool) -> StatusCode {
        StatusCode(bits::with_flag(self.0, Flags::MULTI_VALUE, value))
    }

    pub const fn has_extra_data(self) -> bool {
        bits::flag(self.0, Flags::EXTRA_DATA)
    }

    pub const fn with_extra_data(self, value: bool) -> StatusCode {
        StatusCode(bits::with_flag(self.0, Flags::EXTRA_DATA, value))
    }

    pub const fn partial(self) -> bool {
        bits::flag(self.0, Flags::PARTIAL)
    }

    pub const fn with_partial(self, value: bool) -> StatusCode {
        StatusCode(bits::with_flag(self.0, Flags::PARTIAL, value))
    }

    /// `None` when both value type bits are set, which only happens for
    /// unchecked words.
    pub const fn value_type(self) -> Option<ValueType> {
        ValueType::from_bits(bits::value_type(self.0))
    }

    pub const fn with_value_type(self, value_type: ValueType) -> StatusCode {
        StatusCode(bits::with_value_type(self.0, value_type as u32))
    }
}

fn check(code: u32) -> Result<(), ValidationError> {
    if code == 0 {
        return Ok(());
    }
    if code & bits::SEVERITY_MASK == bits::SEVERITY_MASK {
        return Err(ValidationError::UnsupportedSeverity);
    }
    if code & bits::RESERVED_HIGH_MASK != 0 {
        return Err(ValidationError::ReservedHighBits);
    }
    let category = bits::category(code);
    if Category::from_value(category).is_none() {
        return Err(ValidationError::UnknownCategory(category));
    }
    if code & bits::RESERVED_MIDDLE_MASK != 0 {
        return Err(ValidationError::ReservedMiddleBits);
    }
    if code & bits::RESERVED_LOW_MASK != 0 {
        return Err(ValidationError::ReservedLowBits);
    }
    if bits::flag(code, Flags::INFO_TYPE) {
        if bits::value_type(code) == bits::VALUE_TYPE_MASK {
            return Err(ValidationError::CalculatedAndInterpolated);
        }
    } else if code & bits::INFO_BITS_MASK != 0 {
        return Err(ValidationError::InfoBitsWithoutInfoType);
    }
    Ok(())
}

impl From<Category> for StatusCode {
    fn from(category: Category) -> StatusCode {
        StatusCode::from_category(category)
    }
}

impl From<StatusCode> for u32 {
    fn from(status: StatusCode) -> u32 {
        status.0
    }
}

impl TryFrom<u32> for StatusCode {
    type Error = ValidationError;
    fn try_from(code: u32) -> Result<StatusCode, ValidationError> {
        StatusCode::try_create(code)
    }
}

impl std::str::FromStr for StatusCode {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<StatusCode, ValidationError> {
        StatusCode::parse(s)
    }
}

impl fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatusCode({:#010X}, \"{}\")", self.0, self)
    }
}
