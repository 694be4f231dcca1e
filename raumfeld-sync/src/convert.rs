//! Coercion of snapshot values into declared leaf types

use raumfeld_tree::{StateValue, ValueType};

/// Coerce `value` to the leaf's declared target type.
///
/// The null sentinel passes through untouched regardless of target, so
/// callers can use it to signal deletion intent. Conversion never fails:
/// a value that cannot become a number yields `NaN`, never a silent `0`,
/// and the boolean/json targets are lenient passthroughs.
pub fn coerce(value: StateValue, target: ValueType) -> StateValue {
    if value.is_null() {
        return value;
    }

    match target {
        ValueType::Text => match value {
            StateValue::Text(_) => value,
            other => StateValue::Text(other.to_string()),
        },
        ValueType::Number => StateValue::Number(to_f64(&value)),
        // Lenient passthrough
        ValueType::Boolean | ValueType::Json => value,
    }
}

fn to_f64(value: &StateValue) -> f64 {
    match value {
        StateValue::Number(n) => *n,
        StateValue::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        StateValue::Bool(true) => 1.0,
        StateValue::Bool(false) => 0.0,
        StateValue::Null | StateValue::Json(_) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_to_number() {
        assert_eq!(coerce("42".into(), ValueType::Number), StateValue::Number(42.0));
        assert_eq!(coerce(" 1.5 ".into(), ValueType::Number), StateValue::Number(1.5));
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(
            coerce(StateValue::Number(42.0), ValueType::Text),
            StateValue::Text("42".into())
        );
        assert_eq!(
            coerce(StateValue::Bool(true), ValueType::Text),
            StateValue::Text("true".into())
        );
    }

    #[test]
    fn test_null_passes_through_untouched() {
        assert!(coerce(StateValue::Null, ValueType::Number).is_null());
        assert!(coerce(StateValue::Null, ValueType::Text).is_null());
        assert!(coerce(StateValue::Null, ValueType::Json).is_null());
    }

    #[test]
    fn test_unparsable_number_is_nan_not_zero() {
        let converted = coerce("Schlafzimmer".into(), ValueType::Number);
        assert!(converted.is_nan());
        assert_ne!(converted, StateValue::Number(0.0));
    }

    #[test]
    fn test_boolean_and_json_are_passthrough() {
        assert_eq!(
            coerce("yes".into(), ValueType::Boolean),
            StateValue::Text("yes".into())
        );
        let json = StateValue::Json(serde_json::json!({ "a": 1 }));
        assert_eq!(coerce(json.clone(), ValueType::Json), json);
    }

    #[test]
    fn test_bool_to_number() {
        assert_eq!(coerce(true.into(), ValueType::Number), StateValue::Number(1.0));
        assert_eq!(coerce(false.into(), ValueType::Number), StateValue::Number(0.0));
    }
}
