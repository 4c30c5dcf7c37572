//! Text-to-native value conversion

use super::atomic::{AtomicType, DateTimeResolution};
use crate::domain::{Element, ProtocolViolation, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use url::Url;

/// A property value converted from its wire text
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    String(String),
    Decimal(f64),
    Integer(i64),
    /// DateTime with year or date resolution
    Date(NaiveDate),
    /// DateTime with time resolution
    DateTime(DateTime<FixedOffset>),
    Boolean(bool),
    /// Absolute URI
    Uri(Url),
    /// Relative URI reference, kept as sent
    UriReference(String),
    Id(String),
    /// Raw value node; rendering and sanitizing are up to the caller
    Html(Element),
}

impl NativeValue {
    /// String content for String and Id values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::String(s) | NativeValue::Id(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean content
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            NativeValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Protocol boolean: `true`/`1` and `false`/`0`, nothing else
///
/// # Errors
///
/// Returns [`ProtocolViolation::InvalidValue`] for any other text.
pub fn parse_bool(text: &str) -> Result<bool> {
    match text {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ProtocolViolation::InvalidValue(format!(
            "an invalid boolean was found: {text:?}"
        ))
        .into()),
    }
}

/// Integer with the lenient fallback: malformed text becomes `0`
pub(crate) fn lenient_integer(text: &str) -> i64 {
    text.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(value = %text, "Malformed integer, using 0");
        0
    })
}

/// Decimal with the lenient fallback: malformed text becomes `0.0`
pub(crate) fn lenient_decimal(text: &str) -> f64 {
    text.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(value = %text, "Malformed decimal, using 0.0");
        0.0
    })
}

fn parse_timestamp(text: &str) -> Result<DateTime<FixedOffset>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt);
    }
    // offsets without a colon, e.g. +0200
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(dt);
    }

    let utc = FixedOffset::east_opt(0)
        .ok_or_else(|| ProtocolViolation::InvalidValue("UTC offset".to_string()))?;

    let naive = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            ProtocolViolation::InvalidValue(format!("an invalid timestamp was found: {text:?}"))
        })?;

    Ok(utc.from_utc_datetime(&naive))
}

/// Absolute URIs become [`NativeValue::Uri`]; relative references made only
/// of URI characters are kept as [`NativeValue::UriReference`]
fn parse_uri(text: &str) -> Result<NativeValue> {
    let text = text.trim();
    match Url::parse(text) {
        Ok(url) => Ok(NativeValue::Uri(url)),
        Err(url::ParseError::RelativeUrlWithoutBase) if is_uri_reference(text) => {
            Ok(NativeValue::UriReference(text.to_string()))
        }
        Err(e) => Err(ProtocolViolation::InvalidValue(format!(
            "an invalid URI was found: {text:?} ({e})"
        ))
        .into()),
    }
}

fn is_uri_reference(text: &str) -> bool {
    text.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b"-._~:/?#[]@!$&'()*+,;=%".contains(&b))
}

impl AtomicType {
    /// Convert a value node to its native representation
    ///
    /// Html keeps the node itself; every other kind reads the node's text.
    pub fn to_native(&self, node: &Element) -> Result<NativeValue> {
        match self {
            AtomicType::Html => Ok(NativeValue::Html(node.clone())),
            _ => self.convert_text(node.text()),
        }
    }

    /// Convert raw text to its native representation
    ///
    /// # Errors
    ///
    /// - Boolean: anything but `true`/`1`/`false`/`0`
    /// - DateTime: text that is not a timestamp
    /// - Uri: text with characters a URI reference cannot contain
    ///
    /// Malformed Decimal and Integer text does not fail; it converts to zero
    /// and logs a warning.
    pub fn convert_text(&self, text: &str) -> Result<NativeValue> {
        let value = match self {
            AtomicType::String { .. } => NativeValue::String(text.to_string()),
            AtomicType::Id => NativeValue::Id(text.to_string()),
            AtomicType::Decimal { .. } => NativeValue::Decimal(lenient_decimal(text)),
            AtomicType::Integer { .. } => NativeValue::Integer(lenient_integer(text)),
            AtomicType::Boolean => NativeValue::Boolean(parse_bool(text)?),
            AtomicType::DateTime { resolution } => {
                let timestamp = parse_timestamp(text)?;
                match resolution {
                    DateTimeResolution::Year | DateTimeResolution::Date => {
                        NativeValue::Date(timestamp.date_naive())
                    }
                    DateTimeResolution::Time => NativeValue::DateTime(timestamp),
                }
            }
            AtomicType::Uri => parse_uri(text)?,
            AtomicType::Html => NativeValue::Html(Element::unqualified("value").with_text(text)),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::namespaces::CMIS_CORE;
    use crate::domain::CmisError;
    use chrono::{Datelike, Timelike};
    use test_case::test_case;

    #[test_case("true", true)]
    #[test_case("1", true)]
    #[test_case("false", false)]
    #[test_case("0", false)]
    fn test_parse_bool_valid(input: &str, expected: bool) {
        assert_eq!(parse_bool(input).unwrap(), expected);
        assert_eq!(
            AtomicType::Boolean.convert_text(input).unwrap(),
            NativeValue::Boolean(expected)
        );
    }

    #[test_case("yes")]
    #[test_case("TRUE")]
    #[test_case("")]
    #[test_case(" 1")]
    fn test_parse_bool_invalid(input: &str) {
        let err = AtomicType::Boolean.convert_text(input).unwrap_err();
        assert!(matches!(
            err,
            CmisError::Protocol(ProtocolViolation::InvalidValue(_))
        ));
    }

    #[test]
    fn test_string_and_id_passthrough() {
        let s = AtomicType::String { max_length: None }
            .convert_text(" keep spaces ")
            .unwrap();
        assert_eq!(s.as_str(), Some(" keep spaces "));
        assert_eq!(
            AtomicType::Id.convert_text("@root@").unwrap(),
            NativeValue::Id("@root@".to_string())
        );
    }

    #[test]
    fn test_integer_and_decimal() {
        let int = AtomicType::Integer {
            min_value: None,
            max_value: None,
        };
        assert_eq!(int.convert_text("42").unwrap(), NativeValue::Integer(42));
        assert_eq!(int.convert_text("-7").unwrap(), NativeValue::Integer(-7));

        let dec = AtomicType::Decimal {
            precision: None,
            min_value: None,
            max_value: None,
        };
        assert_eq!(dec.convert_text("2.5").unwrap(), NativeValue::Decimal(2.5));
    }

    #[test]
    fn test_malformed_numbers_degrade_to_zero() {
        let int = AtomicType::Integer {
            min_value: None,
            max_value: None,
        };
        assert_eq!(int.convert_text("abc").unwrap(), NativeValue::Integer(0));

        let dec = AtomicType::Decimal {
            precision: None,
            min_value: None,
            max_value: None,
        };
        assert_eq!(dec.convert_text("").unwrap(), NativeValue::Decimal(0.0));
    }

    #[test]
    fn test_date_time_time_resolution_keeps_timestamp() {
        let dt = AtomicType::DateTime {
            resolution: DateTimeResolution::Time,
        };
        match dt.convert_text("2010-03-04T05:06:07.000+02:00").unwrap() {
            NativeValue::DateTime(ts) => {
                assert_eq!(ts.hour(), 5);
                assert_eq!(ts.minute(), 6);
                assert_eq!(ts.offset().local_minus_utc(), 7200);
            }
            other => panic!("Expected DateTime, got {other:?}"),
        }
    }

    #[test_case(DateTimeResolution::Year)]
    #[test_case(DateTimeResolution::Date)]
    fn test_date_time_coarse_resolution_truncates(resolution: DateTimeResolution) {
        let dt = AtomicType::DateTime { resolution };
        match dt.convert_text("2010-03-04T23:06:07Z").unwrap() {
            NativeValue::Date(date) => {
                assert_eq!((date.year(), date.month(), date.day()), (2010, 3, 4));
            }
            other => panic!("Expected Date, got {other:?}"),
        }
    }

    #[test]
    fn test_date_time_without_offset_is_utc() {
        let dt = AtomicType::DateTime {
            resolution: DateTimeResolution::Time,
        };
        match dt.convert_text("2010-03-04T05:06:07").unwrap() {
            NativeValue::DateTime(ts) => assert_eq!(ts.offset().local_minus_utc(), 0),
            other => panic!("Expected DateTime, got {other:?}"),
        }
    }

    #[test]
    fn test_date_time_malformed_fails() {
        let dt = AtomicType::DateTime {
            resolution: DateTimeResolution::Date,
        };
        let err = dt.convert_text("yesterday").unwrap_err();
        assert!(err.is_protocol_violation());
    }

    #[test]
    fn test_uri_parse() {
        let value = AtomicType::Uri
            .convert_text("http://example.org/a?b=c")
            .unwrap();
        match value {
            NativeValue::Uri(url) => assert_eq!(url.host_str(), Some("example.org")),
            other => panic!("Expected Uri, got {other:?}"),
        }
        assert!(AtomicType::Uri.convert_text("not a uri").is_err());
    }

    #[test_case("/docs/a.pdf")]
    #[test_case("docs/a.pdf?rev=2#p3")]
    #[test_case("../up")]
    fn test_uri_relative_reference(text: &str) {
        assert_eq!(
            AtomicType::Uri.convert_text(text).unwrap(),
            NativeValue::UriReference(text.to_string())
        );
    }

    #[test]
    fn test_date_time_offset_without_colon() {
        let dt = AtomicType::DateTime {
            resolution: DateTimeResolution::Time,
        };
        match dt.convert_text("2010-03-04T05:06:07.000+0200").unwrap() {
            NativeValue::DateTime(ts) => {
                assert_eq!(ts.hour(), 5);
                assert_eq!(ts.offset().local_minus_utc(), 7200);
            }
            other => panic!("Expected DateTime, got {other:?}"),
        }
    }

    #[test]
    fn test_html_keeps_node() {
        let node = Element::new(CMIS_CORE, "value")
            .with_text("<b>bold</b>")
            .with_attribute("lang", "en");
        let value = AtomicType::Html.to_native(&node).unwrap();
        assert_eq!(value, NativeValue::Html(node));
    }

    #[test]
    fn test_to_native_reads_node_text() {
        let node = Element::leaf(CMIS_CORE, "value", "1");
        assert_eq!(
            AtomicType::Boolean.to_native(&node).unwrap().as_bool(),
            Some(true)
        );
    }
}
