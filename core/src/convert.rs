//! String-to-value conversion.
//!
//! Targets are converted through their [`FromStr`] implementation, which is
//! locale independent and range checked for the integer types: `"300"` is
//! rejected for `u8` rather than truncated. User types opt in by
//! implementing `FromStr`.

use std::fmt::Display;
use std::str::FromStr;

use crate::ConversionError;

/// Converts a raw token into `T`.
///
/// # Errors
///
/// Returns a [`ConversionError`] carrying the token, the target type name,
/// and the reason reported by `T::from_str`.
///
/// # Examples
///
/// ```
/// use clarg_core::convert;
///
/// assert_eq!(convert::<u16>("300"), Ok(300));
/// assert_eq!(convert::<f64>("128"), Ok(128.0));
/// assert!(convert::<u8>("300").is_err());
/// assert!(convert::<i32>("12abc").is_err());
/// ```
pub fn convert<T>(raw: &str) -> Result<T, ConversionError>
where
    T: FromStr,
    T::Err: Display,
{
    T::from_str(raw).map_err(|e| ConversionError {
        input: raw.to_string(),
        target: short_type_name::<T>(),
        reason: e.to_string(),
    })
}

/// Converts an occurrence count into the counter's type.
///
/// # Examples
///
/// ```
/// use clarg_core::convert_count;
///
/// assert_eq!(convert_count::<u8>(7), Ok(7));
/// assert!(convert_count::<u8>(256).is_err());
/// ```
pub fn convert_count<T>(count: usize) -> Result<T, ConversionError>
where
    T: TryFrom<usize>,
    T::Error: Display,
{
    T::try_from(count).map_err(|e| ConversionError {
        input: count.to_string(),
        target: short_type_name::<T>(),
        reason: e.to_string(),
    })
}

/// `std::any::type_name` without the module path, e.g. `String` rather
/// than `alloc::string::String`.
fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    let short = base.rsplit("::").next().unwrap_or(base);
    format!("{short}{}", &full[base.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Vendor(Vec<String>);

    impl FromStr for Vendor {
        type Err = std::convert::Infallible;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Ok(Vendor(s.split(':').map(String::from).collect()))
        }
    }

    #[test]
    fn test_integer_overflow_is_rejected() {
        let err = convert::<u8>("300").unwrap_err();
        assert_eq!(err.target, "u8");
        assert_eq!(err.input, "300");
        assert!(err.reason.contains("too large"), "{}", err.reason);
    }

    #[test]
    fn test_signed_and_float() {
        assert_eq!(convert::<i8>("-128"), Ok(-128));
        assert!(convert::<i8>("-129").is_err());
        assert_eq!(convert::<f32>("1.5"), Ok(1.5));
    }

    #[test]
    fn test_user_type_through_from_str() {
        let vendor: Vendor = convert("abcd:123:xyz").unwrap();
        assert_eq!(
            vendor,
            Vendor(vec!["abcd".into(), "123".into(), "xyz".into()])
        );
    }

    #[test]
    fn test_type_name_is_shortened() {
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<u64>(), "u64");
    }

    #[test]
    fn test_count_overflow() {
        assert_eq!(convert_count::<u64>(3), Ok(3));
        let err = convert_count::<i8>(200).unwrap_err();
        assert_eq!(err.target, "i8");
    }
}
