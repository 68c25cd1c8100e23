//! Typed readers over the loosely-typed argument bag of a tool call.
//!
//! A JSON `null` is treated the same as an absent key.

// Use 3rd party
use serde_json::Value;

// Use local
use crate::endpoints::charts::ALL_GENRES;
use crate::endpoints::Order;
use crate::tools::ToolError;

pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 25;

fn present<'a>(args: &'a Value, key: &str) -> Option<&'a Value> {
    args.get(key).filter(|value| !value.is_null())
}

fn invalid(key: &str, reason: impl Into<String>) -> ToolError {
    ToolError::InvalidArgument {
        name: key.to_owned(),
        reason: reason.into(),
    }
}

pub fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, ToolError> {
    let value = present(args, key).ok_or_else(|| ToolError::MissingArgument(key.to_owned()))?;
    let value = value.as_str().ok_or_else(|| invalid(key, "must be a string"))?;

    if value.trim().is_empty() {
        return Err(invalid(key, "must not be empty"));
    }
    Ok(value)
}

pub fn opt_bool(args: &Value, key: &str) -> Result<Option<bool>, ToolError> {
    match present(args, key) {
        Some(value) => value
            .as_bool()
            .map(Some)
            .ok_or_else(|| invalid(key, "must be a boolean")),
        None => Ok(None),
    }
}

/// `limit`, defaulting to `default` and bounded to `[MIN_LIMIT, MAX_LIMIT]`.
pub fn limit(args: &Value, default: u32) -> Result<u32, ToolError> {
    let value = match present(args, "limit") {
        Some(value) => value
            .as_i64()
            .ok_or_else(|| invalid("limit", "must be an integer"))?,
        None => return Ok(default),
    };

    if value < i64::from(MIN_LIMIT) || value > i64::from(MAX_LIMIT) {
        return Err(invalid(
            "limit",
            format!("must be between {} and {}, got {}", MIN_LIMIT, MAX_LIMIT, value),
        ));
    }
    Ok(value as u32)
}

pub fn order(args: &Value) -> Result<Option<Order>, ToolError> {
    match present(args, "order") {
        Some(value) => {
            let name = value.as_str().ok_or_else(|| invalid("order", "must be a string"))?;
            name.parse().map(Some).map_err(|_| {
                let allowed: Vec<&str> = Order::ALL.iter().map(|order| order.as_str()).collect();
                invalid("order", format!("must be one of {}, got {:?}", allowed.join(", "), name))
            })
        }
        None => Ok(None),
    }
}

/// A positive Deezer id. Digit strings are accepted as well since some
/// callers quote large integers.
pub fn id(args: &Value, key: &str) -> Result<u64, ToolError> {
    let value = present(args, key).ok_or_else(|| ToolError::MissingArgument(key.to_owned()))?;
    match as_id(value) {
        Some(id) if id > 0 => Ok(id),
        _ => Err(invalid(key, "must be a positive integer")),
    }
}

/// An optional genre id where `0`, the default, means every genre.
pub fn genre_or_all(args: &Value, key: &str) -> Result<u64, ToolError> {
    match present(args, key) {
        Some(value) => as_id(value).ok_or_else(|| invalid(key, "must be a non-negative integer")),
        None => Ok(ALL_GENRES),
    }
}

fn as_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(digits) => digits.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_str_present() {
        let args = json!({ "track_name": "Starboy" });
        assert_eq!(required_str(&args, "track_name").unwrap(), "Starboy");
    }

    #[test]
    fn required_str_missing_or_null() {
        assert!(matches!(
            required_str(&json!({}), "track_name"),
            Err(ToolError::MissingArgument(key)) if key == "track_name"
        ));
        assert!(matches!(
            required_str(&json!({ "track_name": null }), "track_name"),
            Err(ToolError::MissingArgument(_))
        ));
    }

    #[test]
    fn required_str_rejects_blank_and_non_strings() {
        assert!(required_str(&json!({ "q": "  " }), "q").is_err());
        assert!(required_str(&json!({ "q": 3 }), "q").is_err());
    }

    #[test]
    fn opt_bool_wrong_type() {
        assert_eq!(opt_bool(&json!({}), "strict").unwrap(), None);
        assert_eq!(opt_bool(&json!({ "strict": false }), "strict").unwrap(), Some(false));
        assert!(opt_bool(&json!({ "strict": "yes" }), "strict").is_err());
    }

    #[test]
    fn limit_defaults_and_bounds() {
        assert_eq!(limit(&json!({}), 10).unwrap(), 10);
        assert_eq!(limit(&json!({ "limit": 25 }), 10).unwrap(), 25);
        assert_eq!(limit(&json!({ "limit": 1 }), 10).unwrap(), 1);

        let err = limit(&json!({ "limit": 26 }), 10).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument `limit`: must be between 1 and 25, got 26");
        assert!(limit(&json!({ "limit": 0 }), 10).is_err());
        assert!(limit(&json!({ "limit": -4 }), 10).is_err());
        assert!(limit(&json!({ "limit": 2.5 }), 10).is_err());
    }

    #[test]
    fn order_from_fixed_set() {
        assert_eq!(order(&json!({})).unwrap(), None);
        assert_eq!(order(&json!({ "order": "RATING_DESC" })).unwrap(), Some(Order::RatingDesc));
        assert!(order(&json!({ "order": "rating_desc" })).is_err());
        assert!(order(&json!({ "order": 1 })).is_err());
    }

    #[test]
    fn id_must_be_positive() {
        assert_eq!(id(&json!({ "track_id": 3135556 }), "track_id").unwrap(), 3135556);
        assert_eq!(id(&json!({ "track_id": "3135556" }), "track_id").unwrap(), 3135556);
        assert!(id(&json!({ "track_id": 0 }), "track_id").is_err());
        assert!(id(&json!({ "track_id": -1 }), "track_id").is_err());
        assert!(matches!(id(&json!({}), "track_id"), Err(ToolError::MissingArgument(_))));
    }

    #[test]
    fn genre_defaults_to_all() {
        assert_eq!(genre_or_all(&json!({}), "genre_id").unwrap(), 0);
        assert_eq!(genre_or_all(&json!({ "genre_id": 0 }), "genre_id").unwrap(), 0);
        assert_eq!(genre_or_all(&json!({ "genre_id": "132" }), "genre_id").unwrap(), 132);
        assert!(genre_or_all(&json!({ "genre_id": -1 }), "genre_id").is_err());
    }
}
