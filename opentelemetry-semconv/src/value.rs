//! Typed access to the documented values of enum attributes.
//!
//! Each string enum attribute has a matching Rust enum in [`crate::attribute`],
//! for example [`crate::attribute::HttpRequestMethod`]. The conversion from a
//! string is advisory: the conventions allow values outside the documented set
//! and nothing here rejects them on telemetry.
use std::fmt::Display;
use std::str::FromStr;

/// A closed set of documented values for one attribute.
pub trait EnumValue: Copy + Display + FromStr<Err = UnknownValue> + 'static {
    /// Key of the attribute these values belong to.
    const ATTRIBUTE: &'static str;

    /// Every documented value, in model order.
    fn all() -> &'static [Self];

    /// The value as it is recorded on telemetry.
    fn as_str(self) -> &'static str;
}

/// A string that is not one of the documented values of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not a documented value of `{attribute}`")]
pub struct UnknownValue {
    /// The attribute that was being parsed.
    pub attribute: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Finds the documented value of `T` whose literal is exactly `value`.
///
/// Matching is case sensitive, `"get"` is not an HTTP request method.
pub fn parse<T: EnumValue>(value: &str) -> Result<T, UnknownValue> {
    T::all()
        .iter()
        .copied()
        .find(|candidate| candidate.as_str() == value)
        .ok_or_else(|| UnknownValue {
            attribute: T::ATTRIBUTE,
            value: value.to_owned(),
        })
}

#[cfg(test)]
pub(crate) type EnumLiterals = fn() -> (&'static str, Vec<&'static str>);

/// The attribute key of `T` and the literal of every value, in order.
#[cfg(test)]
pub(crate) fn literals<T: EnumValue>() -> (&'static str, Vec<&'static str>) {
    (T::ATTRIBUTE, T::all().iter().map(|value| value.as_str()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{
        ErrorType, HttpRequestMethod, NetworkTransport, HTTP_REQUEST_METHOD, NETWORK_TRANSPORT,
    };
    use rstest::rstest;

    #[rstest]
    #[case("GET", HttpRequestMethod::Get)]
    #[case("_OTHER", HttpRequestMethod::Other)]
    #[case("QUERY", HttpRequestMethod::Query)]
    fn parses_documented_values(#[case] input: &str, #[case] expected: HttpRequestMethod) {
        assert_eq!(input.parse::<HttpRequestMethod>(), Ok(expected));
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case("get")]
    #[case("")]
    #[case(" GET")]
    #[case("BREW")]
    fn rejects_undocumented_values(#[case] input: &str) {
        let err = input.parse::<HttpRequestMethod>().unwrap_err();
        assert_eq!(
            err,
            UnknownValue {
                attribute: HTTP_REQUEST_METHOD,
                value: input.to_owned(),
            }
        );
    }

    #[test]
    fn unknown_value_message() {
        let err = parse::<NetworkTransport>("sctp").unwrap_err();
        assert_eq!(
            err.to_string(),
            "`sctp` is not a documented value of `network.transport`"
        );
        assert_eq!(err.attribute, NETWORK_TRANSPORT);
    }

    #[test]
    fn all_round_trips_through_from_str() {
        fn check<T: EnumValue + PartialEq + std::fmt::Debug>() {
            assert!(!T::all().is_empty(), "{} has no values", T::ATTRIBUTE);
            for value in T::all() {
                assert_eq!(value.as_str().parse::<T>().as_ref(), Ok(value));
            }
        }
        check::<HttpRequestMethod>();
        check::<NetworkTransport>();
        check::<ErrorType>();
    }
}
