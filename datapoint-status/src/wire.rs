//! JSON wire form of a status code.
//!
//! A status code is written as `{"code": <integer>}`. On read, `null` (or
//! a missing field) is `Good`, `code` is taken as the raw word and wins
//! over `symbol`, and `symbol` goes through the strict parser.
//!
//! The numeric `code` is deliberately admitted without validation: the
//! server may send categories this client does not know yet, and those
//! must survive decode and re-encode unchanged. Use
//! [`StatusCode::validate`] when a strict check is needed.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::StatusCode;

#[derive(Deserialize)]
struct WireIn {
    #[serde(default)]
    code: Option<u32>,
    #[serde(default)]
    symbol: Option<String>,
}

#[derive(Serialize)]
struct WireOut {
    code: u32,
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireOut { code: self.code() }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Some(wire) = Option::<WireIn>::deserialize(deserializer)? else {
            return Ok(StatusCode::GOOD);
        };
        if let Some(code) = wire.code {
            let status = StatusCode::from_raw_unchecked(code);
            if tracing::enabled!(tracing::Level::DEBUG) {
                if let Err(e) = status.validate() {
                    tracing::debug!("admitting status code {code:#010X} from the wire as-is: {e}");
                }
            }
            return Ok(status);
        }
        match wire.symbol {
            Some(symbol) => StatusCode::parse(&symbol).map_err(D::Error::custom),
            None => Ok(StatusCode::GOOD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Limit};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize)]
    struct Holder {
        #[serde(default)]
        status: StatusCode,
    }

    #[test]
    fn encodes_code_only() {
        let status = StatusCode::parse("Bad, Low").unwrap();
        assert_eq!(
            serde_json::to_value(status).unwrap(),
            json!({"code": 0x8000_0500u32})
        );
        assert_eq!(serde_json::to_value(StatusCode::GOOD).unwrap(), json!({"code": 0}));
    }

    #[test]
    fn null_and_missing_are_good() {
        let status: StatusCode = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(status, StatusCode::GOOD);
        let holder: Holder = serde_json::from_value(json!({})).unwrap();
        assert_eq!(holder.status, StatusCode::GOOD);
        let holder: Holder = serde_json::from_value(json!({"status": null})).unwrap();
        assert_eq!(holder.status, StatusCode::GOOD);
        let status: StatusCode = serde_json::from_value(json!({})).unwrap();
        assert_eq!(status, StatusCode::GOOD);
    }

    #[test]
    fn symbol_is_parsed() {
        let status: StatusCode =
            serde_json::from_value(json!({"symbol": "BadSensorFailure, High"})).unwrap();
        assert_eq!(status.category(), Some(Category::BadSensorFailure));
        assert_eq!(status.limit(), Limit::High);
    }

    #[test]
    fn bad_symbol_fails_decode() {
        let err = serde_json::from_value::<StatusCode>(json!({"symbol": "Bad, Low, High"}))
            .unwrap_err();
        assert!(err.to_string().contains("more than one limit"), "{err}");
    }

    #[test]
    fn code_wins_over_symbol() {
        let status: StatusCode =
            serde_json::from_value(json!({"code": 0x8033_0000u32, "symbol": "Good"})).unwrap();
        assert_eq!(status, StatusCode::from(Category::BadNodeIdInvalid));
        // The symbol is not even looked at.
        let status: StatusCode =
            serde_json::from_value(json!({"code": 0, "symbol": "Nonsense"})).unwrap();
        assert_eq!(status, StatusCode::GOOD);
    }

    #[test]
    fn code_is_not_validated() {
        let status: StatusCode = serde_json::from_value(json!({"code": 12345})).unwrap();
        assert_eq!(status.code(), 12345);
        assert!(StatusCode::try_create(12345).is_err());
        assert_eq!(serde_json::to_value(status).unwrap(), json!({"code": 12345}));
    }

    #[test]
    fn negative_code_is_a_type_error() {
        assert!(serde_json::from_value::<StatusCode>(json!({"code": -1})).is_err());
    }
}
