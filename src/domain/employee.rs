use crate::error::PayEmployeeError;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Numeric identifier of an employee on the payroll.
///
/// Parsing is strict: only plain base-10 digits are accepted. Anything else
/// (signs, whitespace, letters, an empty string) is rejected rather than being
/// read as zero. Numbers too large for a `u32` saturate to `u32::MAX`, which is
/// never payable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(u32);

impl EmployeeId {
    /// Ids strictly below this bound are eligible for payment.
    pub const PAYABLE_LIMIT: u32 = 3;

    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_payable(&self) -> bool {
        self.0 < Self::PAYABLE_LIMIT
    }
}

impl FromStr for EmployeeId {
    type Err = PayEmployeeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || PayEmployeeError::MalformedEmployeeNumber {
            input: input.to_string(),
        };

        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        match input.parse::<u32>() {
            Ok(id) => Ok(Self(id)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Self(u32::MAX)),
            Err(_) => Err(malformed()),
        }
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
