use regex::Regex;

use crate::errors::CustomError;

const EVM_ADDRESS_PATTERN: &str = r"^0x[a-fA-F0-9]{40}$";

#[derive(Clone)]
pub struct ValidationService {
    address_re: Regex,
}

impl ValidationService {
    pub fn new() -> Self {
        Self {
            address_re: Regex::new(EVM_ADDRESS_PATTERN).expect("address pattern compiles"),
        }
    }

    pub fn is_valid_wallet_address(&self, address: &str) -> bool {
        self.address_re.is_match(address)
    }

    pub fn validate_wallet_address(&self, address: &str) -> Result<(), CustomError> {
        if self.is_valid_wallet_address(address) {
            Ok(())
        } else {
            Err(CustomError::InvalidAddressError(address.to_string()))
        }
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}
