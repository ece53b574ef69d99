/// Reasons a raw word or a symbol cannot be admitted as a [`StatusCode`].
///
/// Each variant maps to exactly one structural rule, so callers can tell
/// which invariant failed without inspecting the message text. Use
/// [`ValidationError::error_type`] for a stable machine-readable tag.
///
/// [`StatusCode`]: crate::StatusCode
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    #[display("Unsupported severity: both severity bits are set")]
    UnsupportedSeverity,
    #[display("Reserved bits 28-29 must be zero")]
    ReservedHighBits,
    #[display("Unknown status code category: {_0:#010X}")]
    UnknownCategory(#[error(not(source))] u32),
    #[display("Reserved bits 11-13 must be zero")]
    ReservedMiddleBits,
    #[display("Reserved bits 5-6 must be zero")]
    ReservedLowBits,
    #[display("Calculated and Interpolated are mutually exclusive")]
    CalculatedAndInterpolated,
    #[display("Info bits are set but the info type is not DataValue")]
    InfoBitsWithoutInfoType,
    #[display("Unknown status code category name: {_0:?}")]
    UnknownCategoryName(#[error(not(source))] String),
    #[display("Unknown status code flag: {_0:?}")]
    UnknownFlag(#[error(not(source))] String),
    #[display("Status code symbol has more than one limit")]
    MoreThanOneLimit,
}

impl ValidationError {
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::UnsupportedSeverity => "unsupported_severity",
            Self::ReservedHighBits => "reserved_high_bits",
            Self::UnknownCategory(_) => "unknown_category",
            Self::ReservedMiddleBits => "reserved_middle_bits",
            Self::ReservedLowBits => "reserved_low_bits",
            Self::CalculatedAndInterpolated => "calculated_and_interpolated",
            Self::InfoBitsWithoutInfoType => "info_bits_without_info_type",
            Self::UnknownCategoryName(_) => "unknown_category_name",
            Self::UnknownFlag(_) => "unknown_flag",
            Self::MoreThanOneLimit => "more_than_one_limit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_names_the_offender() {
        assert_eq!(
            ValidationError::UnknownCategory(0x8123_0000).to_string(),
            "Unknown status code category: 0x81230000"
        );
        assert_eq!(
            ValidationError::UnknownFlag("Sideways".into()).to_string(),
            "Unknown status code flag: \"Sideways\""
        );
    }

    #[test]
    fn error_types_are_distinct() {
        let all = [
            ValidationError::UnsupportedSeverity,
            ValidationError::ReservedHighBits,
            ValidationError::UnknownCategory(0),
            ValidationError::ReservedMiddleBits,
            ValidationError::ReservedLowBits,
            ValidationError::CalculatedAndInterpolated,
            ValidationError::InfoBitsWithoutInfoType,
            ValidationError::UnknownCategoryName(String::new()),
            ValidationError::UnknownFlag(String::new()),
            ValidationError::MoreThanOneLimit,
        ];
        let mut tags = all.iter().map(|e| e.error_type()).collect::<Vec<_>>();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), all.len());
    }
}
