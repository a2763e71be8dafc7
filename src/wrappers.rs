//! Pattern 3: Wrapper Types
//!
//! A `Box<i32>` is the closest analogue of a boxed integer object.
//! Radix helpers treat negative input as its 32-bit two's complement.

use std::io::Write;

use crate::Result;

pub fn boxed(value: i32) -> Box<i32> {
    Box::new(value)
}

/// Exact for every `i16`; larger magnitudes may round.
pub fn to_float(value: i32) -> f32 {
    match i16::try_from(value) {
        Ok(small) => f32::from(small),
        Err(_) => value as f32,
    }
}

pub fn to_hex_string(value: i32) -> String {
    format!("{:x}", value as u32)
}

pub fn to_octal_string(value: i32) -> String {
    format!("{:o}", value as u32)
}

pub fn to_binary_string(value: i32) -> String {
    format!("{:b}", value as u32)
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let a = 10;
    let b = boxed(a);
    let c = to_float(a);
    writeln!(out, "{b}")?;
    writeln!(out, "{c:?}")?;
    writeln!(out, "{}", to_hex_string(11976457))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_radix_strings() {
        assert_eq!(to_hex_string(11976457), "b6bf09");
        assert_eq!(to_octal_string(11976457), "55537411");
        assert_eq!(to_binary_string(11976457), "101101101011111100001001");
    }

    #[test]
    fn test_negative_uses_twos_complement() {
        assert_eq!(to_hex_string(-1), "ffffffff");
        assert_eq!(to_octal_string(-8), "37777777770");
        assert_eq!(to_binary_string(i32::MIN), format!("1{}", "0".repeat(31)));
    }

    proptest! {
        #[test]
        fn test_radix_strings_parse_back(value: i32) {
            let bits = value as u32;
            prop_assert_eq!(u32::from_str_radix(&to_hex_string(value), 16).unwrap(), bits);
            prop_assert_eq!(u32::from_str_radix(&to_octal_string(value), 8).unwrap(), bits);
            prop_assert_eq!(u32::from_str_radix(&to_binary_string(value), 2).unwrap(), bits);
        }

        #[test]
        fn test_small_values_convert_exactly(value in i16::MIN as i32..=i16::MAX as i32) {
            prop_assert_eq!(to_float(value) as i32, value);
        }
    }
}
