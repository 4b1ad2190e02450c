//! Checked arithmetic with the OpenZeppelin SafeMath revert reasons. The
//! fixed contract variants route every balance-affecting computation
//! through here; the vulnerable variants use wrapping arithmetic directly.

use primitive_types::U256;
use swc_chain::ChainError;

pub fn add(a: U256, b: U256) -> Result<U256, ChainError> {
    a.checked_add(b)
        .ok_or_else(|| ChainError::revert("SafeMath: addition overflow"))
}

pub fn sub(a: U256, b: U256) -> Result<U256, ChainError> {
    a.checked_sub(b)
        .ok_or_else(|| ChainError::revert("SafeMath: subtraction overflow"))
}

pub fn mul(a: U256, b: U256) -> Result<U256, ChainError> {
    a.checked_mul(b)
        .ok_or_else(|| ChainError::revert("SafeMath: multiplication overflow"))
}

// 8-bit flavors for the token-sale contracts, which account in uint8.

pub fn add_u8(a: u8, b: u8) -> Result<u8, ChainError> {
    a.checked_add(b)
        .ok_or_else(|| ChainError::revert("SafeMath: addition overflow"))
}

pub fn sub_u8(a: u8, b: u8) -> Result<u8, ChainError> {
    a.checked_sub(b)
        .ok_or_else(|| ChainError::revert("SafeMath: subtraction overflow"))
}

pub fn mul_u8(a: u8, b: u8) -> Result<u8, ChainError> {
    a.checked_mul(b)
        .ok_or_else(|| ChainError::revert("SafeMath: multiplication overflow"))
}

/// Narrowing cast with the SafeCast reason string.
pub fn to_u8(value: U256) -> Result<u8, ChainError> {
    if value > U256::from(u8::MAX) {
        return Err(ChainError::revert("SafeCast: value doesn't fit in 8 bits"));
    }
    Ok(value.low_u64() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_underflow_reason() {
        let err = sub(U256::zero(), U256::one()).unwrap_err();
        assert_eq!(err.reason(), Some("SafeMath: subtraction overflow"));
    }

    #[test]
    fn test_mul_overflow_reason() {
        let half = U256::one() << 255;
        let err = mul(half, U256::from(2u64)).unwrap_err();
        assert_eq!(err.reason(), Some("SafeMath: multiplication overflow"));
    }

    #[test]
    fn test_mul_u8_overflow() {
        assert_eq!(mul_u8(16, 15).unwrap(), 240);
        assert!(mul_u8(128, 2).is_err());
    }

    #[test]
    fn test_to_u8_range() {
        assert_eq!(to_u8(U256::from(255u64)).unwrap(), 255);
        let err = to_u8(U256::from(256u64)).unwrap_err();
        assert_eq!(err.reason(), Some("SafeCast: value doesn't fit in 8 bits"));
    }
}
