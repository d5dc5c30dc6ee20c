pub const ETH_DECIMALS: u32 = 18;

/// An ether amount, stored in wei.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EthAmount {
    wei: u128,
}

impl EthAmount {
    pub fn from_wei(wei: u128) -> Self {
        Self { wei }
    }

    /// Formats the amount to `significant_digits` significant figures.
    pub fn to_significant(&self, significant_digits: u32) -> String {
        format_significant(self.wei, ETH_DECIMALS, significant_digits)
    }
}

/// Renders `raw / 10^decimals` rounded half-up to `significant_digits`
/// significant figures, in positional notation without trailing zeros.
pub fn format_significant(raw: u128, decimals: u32, significant_digits: u32) -> String {
    if raw == 0 {
        return "0".to_string();
    }

    let significant_digits = significant_digits.max(1) as usize;
    let digits = raw.to_string();
    let mut mantissa: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
    // Power of ten of the leading digit.
    let mut exponent = digits.len() as i64 - 1 - decimals as i64;

    if mantissa.len() > significant_digits {
        let round_up = mantissa[significant_digits] >= 5;
        mantissa.truncate(significant_digits);
        if round_up {
            let mut i = significant_digits;
            loop {
                if i == 0 {
                    // 9.99 -> 10.0
                    mantissa.insert(0, 1);
                    mantissa.pop();
                    exponent += 1;
                    break;
                }
                i -= 1;
                if mantissa[i] == 9 {
                    mantissa[i] = 0;
                } else {
                    mantissa[i] += 1;
                    break;
                }
            }
        }
    }

    while mantissa.len() > 1 && mantissa.last() == Some(&0) {
        mantissa.pop();
    }

    let mut out = String::with_capacity(mantissa.len() + 4);
    if exponent < 0 {
        out.push_str("0.");
        for _ in 0..(-exponent - 1) {
            out.push('0');
        }
        out.extend(mantissa.iter().map(|d| char::from(b'0' + d)));
    } else {
        let int_len = exponent as usize + 1;
        for i in 0..int_len {
            out.push(char::from(b'0' + mantissa.get(i).copied().unwrap_or(0)));
        }
        if mantissa.len() > int_len {
            out.push('.');
            out.extend(mantissa[int_len..].iter().map(|d| char::from(b'0' + d)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETHER: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn test_rounds_to_four_significant_digits() {
        let amount = EthAmount::from_wei(1_234_560_000_000_000_000);
        assert_eq!(amount.to_significant(4), "1.235");
    }

    #[test]
    fn test_small_amounts_keep_leading_zeros() {
        // 0.00001234 ETH
        let amount = EthAmount::from_wei(12_340_000_000_000);
        assert_eq!(amount.to_significant(4), "0.00001234");

        // 0.0000123456 ETH
        let amount = EthAmount::from_wei(12_345_600_000_000);
        assert_eq!(amount.to_significant(4), "0.00001235");

        assert_eq!(EthAmount::from_wei(1).to_significant(4), "0.000000000000000001");
    }

    #[test]
    fn test_large_amounts_round_integer_digits() {
        let amount = EthAmount::from_wei(123_456 * ETHER);
        assert_eq!(amount.to_significant(4), "123500");
    }

    #[test]
    fn test_trailing_zeros_are_dropped() {
        assert_eq!(EthAmount::from_wei(ETHER).to_significant(4), "1");
        assert_eq!(EthAmount::from_wei(12 * ETHER / 10).to_significant(4), "1.2");
        assert_eq!(EthAmount::from_wei(ETHER / 2).to_significant(4), "0.5");
        assert_eq!(EthAmount::from_wei(0).to_significant(4), "0");
    }

    #[test]
    fn test_half_up_at_the_boundary() {
        // 1.0005 rounds up, anything below it does not
        assert_eq!(EthAmount::from_wei(1_000_500_000_000_000_000).to_significant(4), "1.001");
        assert_eq!(EthAmount::from_wei(1_000_499_999_999_999_999).to_significant(4), "1");
        // a fifth significant digit of 0 never rounds up
        assert_eq!(EthAmount::from_wei(1_000_050_000_000_000_000).to_significant(4), "1");
    }

    #[test]
    fn test_carry_adds_a_digit() {
        // 9.99995
        assert_eq!(EthAmount::from_wei(9_999_950_000_000_000_000).to_significant(4), "10");
        // 0.099996
        assert_eq!(EthAmount::from_wei(99_996_000_000_000_000).to_significant(4), "0.1");
    }

    #[test]
    fn test_zero_significant_digits_is_treated_as_one() {
        assert_eq!(EthAmount::from_wei(1_600_000_000_000_000_000).to_significant(0), "2");
    }

    #[test]
    fn test_format_significant_with_other_decimals() {
        assert_eq!(format_significant(123_456, 6, 3), "0.123");
        assert_eq!(format_significant(123_456, 0, 2), "120000");
    }
}
