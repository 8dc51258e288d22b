use std::fmt;

/// Unsigned integer of any length, stored as base-10 digits (most significant
/// first). Leading zeros are always stripped; zero is `"0"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalString(String);

impl DecimalString {
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Accepts ASCII digits only. Leading zeros are normalized away.
    pub fn parse(value: &str) -> Option<Self> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let mut digits: Vec<u8> = value.bytes().rev().collect();
        Some(Self::from_reversed(&mut digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Long multiplication by a small constant.
    pub fn multiply_by_small(&self, multiplier: u32) -> Self {
        if multiplier == 0 {
            return Self::zero();
        }

        let mut digits = Vec::with_capacity(self.0.len() + 10);
        let mut carry: u64 = 0;
        for b in self.0.bytes().rev() {
            let product = u64::from(b - b'0') * u64::from(multiplier) + carry;
            digits.push(b'0' + (product % 10) as u8);
            carry = product / 10;
        }
        push_carry(&mut digits, carry);

        Self::from_reversed(&mut digits)
    }

    /// Long addition of a small constant.
    pub fn add_small(&self, addend: u32) -> Self {
        let mut digits = Vec::with_capacity(self.0.len() + 10);
        let mut carry = u64::from(addend);
        for b in self.0.bytes().rev() {
            let sum = u64::from(b - b'0') + carry;
            digits.push(b'0' + (sum % 10) as u8);
            carry = sum / 10;
        }
        push_carry(&mut digits, carry);

        Self::from_reversed(&mut digits)
    }

    // `digits` holds ASCII digits, least significant first.
    fn from_reversed(digits: &mut Vec<u8>) -> Self {
        while digits.len() > 1 && digits.last() == Some(&b'0') {
            digits.pop();
        }
        if digits.is_empty() {
            return Self::zero();
        }
        Self(digits.iter().rev().map(|&d| d as char).collect())
    }
}

fn push_carry(digits: &mut Vec<u8>, mut carry: u64) {
    while carry > 0 {
        digits.push(b'0' + (carry % 10) as u8);
        carry /= 10;
    }
}

impl Default for DecimalString {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
