/*!
Bit layout of a status code word.

| Bits  | Field               |
|-------|---------------------|
| 30-31 | severity            |
| 28-29 | reserved            |
| 16-31 | category            |
| 15    | structure changed   |
| 14    | semantics changed   |
| 11-13 | reserved            |
| 10    | info type           |
| 8-9   | limit               |
| 7     | overflow            |
| 5-6   | reserved            |
| 4     | multiple values     |
| 3     | extra data          |
| 2     | partial             |
| 0-1   | value type          |

The functions here never validate anything. Every setter clears its own
field and ors in the new value, all other bits are left as they were.
*/

pub const SEVERITY_MASK: u32 = 0xC000_0000;
pub const SEVERITY_SHIFT: u32 = 30;
pub const RESERVED_HIGH_MASK: u32 = 0x3000_0000;
pub const CATEGORY_MASK: u32 = 0xFFFF_0000;
pub const RESERVED_MIDDLE_MASK: u32 = 0x0000_3800;
pub const LIMIT_MASK: u32 = 0x0000_0300;
pub const LIMIT_SHIFT: u32 = 8;
pub const RESERVED_LOW_MASK: u32 = 0x0000_0060;
pub const VALUE_TYPE_MASK: u32 = 0x0000_0003;
/// Bits that only carry meaning while [`Flags::INFO_TYPE`] is set.
pub const INFO_BITS_MASK: u32 = 0x0000_03FF;

bitflags::bitflags! {
    /// Single-bit fields of a status code word.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        const STRUCTURE_CHANGED =   0b1000_0000_0000_0000;
        const SEMANTICS_CHANGED =   0b0100_0000_0000_0000;
        const INFO_TYPE =           0b0000_0100_0000_0000;
        const OVERFLOW =            0b0000_0000_1000_0000;
        const MULTI_VALUE =         0b0000_0000_0001_0000;
        const EXTRA_DATA =          0b0000_0000_0000_1000;
        const PARTIAL =             0b0000_0000_0000_0100;
    }
}

pub const fn severity(code: u32) -> u32 {
    (code & SEVERITY_MASK) >> SEVERITY_SHIFT
}

pub const fn with_severity(code: u32, severity: u32) -> u32 {
    (code & !SEVERITY_MASK) | ((severity << SEVERITY_SHIFT) & SEVERITY_MASK)
}

pub const fn category(code: u32) -> u32 {
    code & CATEGORY_MASK
}

pub const fn with_category(code: u32, category: u32) -> u32 {
    (code & !CATEGORY_MASK) | (category & CATEGORY_MASK)
}

pub const fn limit(code: u32) -> u32 {
    (code & LIMIT_MASK) >> LIMIT_SHIFT
}

pub const fn with_limit(code: u32, limit: u32) -> u32 {
    (code & !LIMIT_MASK) | ((limit << LIMIT_SHIFT) & LIMIT_MASK)
}

pub const fn value_type(code: u32) -> u32 {
    code & VALUE_TYPE_MASK
}

pub const fn with_value_type(code: u32, value_type: u32) -> u32 {
    (code & !VALUE_TYPE_MASK) | (value_type & VALUE_TYPE_MASK)
}

pub const fn flag(code: u32, flag: Flags) -> bool {
    code & flag.bits() != 0
}

pub const fn with_flag(code: u32, flag: Flags, value: bool) -> u32 {
    if value {
        code | flag.bits()
    } else {
        code & !flag.bits()
    }
}
