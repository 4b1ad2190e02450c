use primitive_types::U256;

use crate::config::WEI_PER_ETHER;

/// Whole ethers expressed in wei.
pub fn ether(amount: u64) -> U256 {
    U256::from(amount) * U256::from(WEI_PER_ETHER)
}

/// Format a wei amount as a decimal ether string, trimming trailing zeros.
pub fn format_ether(amount: U256) -> String {
    let unit = U256::from(WEI_PER_ETHER);
    let whole = amount / unit;
    let frac = amount % unit;
    if frac.is_zero() {
        return format!("{} ether", whole);
    }
    let frac = format!("{:018}", frac.as_u128());
    format!("{}.{} ether", whole, frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ether_scaling() {
        assert_eq!(ether(1), U256::from(WEI_PER_ETHER));
        assert_eq!(ether(0), U256::zero());
    }

    #[test]
    fn test_format_ether() {
        assert_eq!(format_ether(ether(2)), "2 ether");
        assert_eq!(
            format_ether(ether(1) + U256::from(WEI_PER_ETHER / 2)),
            "1.5 ether"
        );
    }
}
