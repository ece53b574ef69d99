//! Textual form of a status code: a category name followed by flag names,
//! e.g. `"UncertainSensorCalibration, Overflow, ExtraData"`.

use std::fmt;

use crate::bits::{self, Flags};
use crate::{Category, Limit, StatusCode, ValidationError, ValueType};

/// Historical spelling of the severity prefixes.
const LEGACY_PREFIXES: [(&str, &str); 3] = [
    ("Good_", "Good"),
    ("Bad_", "Bad"),
    ("Uncertain_", "Uncertain"),
];

/// Single-bit flags that can only be recorded with the info type bit set.
const GATED: Flags = Flags::OVERFLOW
    .union(Flags::MULTI_VALUE)
    .union(Flags::EXTRA_DATA)
    .union(Flags::PARTIAL);

pub(crate) fn parse(symbol: &str) -> Result<StatusCode, ValidationError> {
    let mut tokens = symbol.split([' ', ',']);
    let first = tokens.next().unwrap_or_default();
    let mut name = first.to_string();
    for (legacy, current) in LEGACY_PREFIXES {
        name = name.replace(legacy, current);
    }
    let category = Category::from_name(&name)
        .ok_or_else(|| ValidationError::UnknownCategoryName(first.to_string()))?;

    let mut code = category.value();
    let mut limit = None;
    let mut value_type = ValueType::Raw;
    let mut calculated = false;
    let mut interpolated = false;
    let mut info = false;

    for token in tokens.filter(|token| !token.is_empty()) {
        let flag = match token {
            "Low" | "High" | "Constant" => {
                if limit.is_some() {
                    return Err(ValidationError::MoreThanOneLimit);
                }
                limit = Some(match token {
                    "Low" => Limit::Low,
                    "High" => Limit::High,
                    _ => Limit::Constant,
                });
                info = true;
                continue;
            }
            "Calculated" => {
                calculated = true;
                value_type = ValueType::Calculated;
                info = true;
                continue;
            }
            "Interpolated" => {
                interpolated = true;
                value_type = ValueType::Interpolated;
                info = true;
                continue;
            }
            "StructureChanged" => Flags::STRUCTURE_CHANGED,
            "SemanticsChanged" => Flags::SEMANTICS_CHANGED,
            "Overflow" => Flags::OVERFLOW,
            "MultipleValues" => Flags::MULTI_VALUE,
            "ExtraData" => Flags::EXTRA_DATA,
            "Partial" => Flags::PARTIAL,
            _ => return Err(ValidationError::UnknownFlag(token.to_string())),
        };
        if flag.intersects(GATED) {
            info = true;
        }
        code |= flag.bits();
    }

    if calculated && interpolated {
        return Err(ValidationError::CalculatedAndInterpolated);
    }
    code = bits::with_limit(code, limit.unwrap_or_default() as u32);
    code = bits::with_value_type(code, value_type as u32);
    if info {
        code |= Flags::INFO_TYPE.bits();
    }
    Ok(StatusCode::from_raw_unchecked(code))
}

impl fmt::Display for StatusCode {
    /// Writes the canonical symbol.
    ///
    /// Only words without reserved bits render losslessly. An unknown
    /// category is written as its hex value, and the info type bit is
    /// implied by the flags that need it rather than written out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code() == 0 {
            return f.write_str("Good");
        }
        match self.category() {
            Some(category) => f.write_str(category.name())?,
            None => write!(f, "{:#010X}", self.category_bits())?,
        }
        let mut flag = |name: &str| -> fmt::Result {
            f.write_str(", ")?;
            f.write_str(name)
        };
        if self.structure_changed() {
            flag("StructureChanged")?;
        }
        if self.semantics_changed() {
            flag("SemanticsChanged")?;
        }
        if self.limit() != Limit::None {
            flag(self.limit().name())?;
        }
        if self.overflow() {
            flag("Overflow")?;
        }
        if self.multi_value() {
            flag("MultipleValues")?;
        }
        if self.has_extra_data() {
            flag("ExtraData")?;
        }
        if self.partial() {
            flag("Partial")?;
        }
        match self.value_type() {
            Some(ValueType::Raw) => {}
            Some(value_type) => flag(value_type.name())?,
            None => {
                flag(ValueType::Calculated.name())?;
                flag(ValueType::Interpolated.name())?;
            }
        }
        Ok(())
    }
}
