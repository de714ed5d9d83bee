//! Decoding of JSON arrays where a bad element is dropped instead of failing the array.

use serde_json::Value;
use std::fmt::Display;
use tracing::warn;

/// Decode a single element, turning a failure into `None`.
fn decode_or_none<T, E, F>(index: usize, element: &Value, decode: &F) -> Option<T>
where
    E: Display,
    F: Fn(&Value) -> Result<T, E>,
{
    match decode(element) {
        Ok(decoded) => Some(decoded),
        Err(error) => {
            warn!(index, error = %error, "dropping element that failed to decode");
            None
        }
    }
}

/// Decode every element of `elements` with `decode`, keeping the ones that succeed in
/// their original order.
#[cfg(not(feature = "rayon"))]
pub fn decode_failable_array<T, E, F>(elements: &[Value], decode: F) -> Vec<T>
where
    E: Display,
    F: Fn(&Value) -> Result<T, E>,
{
    decode_sequential(elements, decode)
}

/// Decode every element of `elements` with `decode`, keeping the ones that succeed in
/// their original order. Elements are decoded on the rayon thread pool.
#[cfg(feature = "rayon")]
pub fn decode_failable_array<T, E, F>(elements: &[Value], decode: F) -> Vec<T>
where
    T: Send,
    E: Display,
    F: Fn(&Value) -> Result<T, E> + Sync,
{
    decode_parallel(elements, decode)
}

// Both paths are built for tests, whichever one the feature set exports.
#[cfg(any(not(feature = "rayon"), test))]
fn decode_sequential<T, E, F>(elements: &[Value], decode: F) -> Vec<T>
where
    E: Display,
    F: Fn(&Value) -> Result<T, E>,
{
    elements
        .iter()
        .enumerate()
        .filter_map(|(index, element)| decode_or_none(index, element, &decode))
        .collect()
}

#[cfg(any(feature = "rayon", test))]
fn decode_parallel<T, E, F>(elements: &[Value], decode: F) -> Vec<T>
where
    T: Send,
    E: Display,
    F: Fn(&Value) -> Result<T, E> + Sync,
{
    use rayon::prelude::*;

    elements
        .par_iter()
        .enumerate()
        .filter_map(|(index, element)| decode_or_none(index, element, &decode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_small_int(value: &Value) -> Result<u8, String> {
        value
            .as_u64()
            .filter(|v| *v < 10)
            .map(|v| v as u8)
            .ok_or_else(|| format!("{} is not a small integer", value))
    }

    fn decode(value: Value) -> Vec<u8> {
        let elements = match value {
            Value::Array(elements) => elements,
            _ => panic!("Not an array"),
        };
        let sequential = decode_sequential(&elements, as_small_int);
        let parallel = decode_parallel(&elements, as_small_int);
        assert_eq!(sequential, parallel);
        assert_eq!(decode_failable_array(&elements, as_small_int), sequential);
        sequential
    }

    #[test]
    fn check_all_valid() {
        assert_eq!(decode(json!([1, 2, 3])), vec![1, 2, 3]);
    }

    #[test]
    fn check_bad_elements_dropped_in_order() {
        assert_eq!(
            decode(json!([1, "two", 3, null, 42, 5, {"six": 6}])),
            vec![1, 3, 5]
        );
    }

    #[test]
    fn check_all_invalid() {
        assert_eq!(decode(json!(["a", [], 100])), Vec::<u8>::new());
        assert_eq!(decode(json!([])), Vec::<u8>::new());
    }

    #[test]
    fn check_large_input_keeps_order() {
        let elements: Vec<Value> = (0..100_000u64).map(|i| json!(i % 20)).collect();
        let decoded = decode(Value::Array(elements));
        assert_eq!(decoded.len(), 50_000);
        let expected: Vec<u8> = (0..100_000u64)
            .map(|i| i % 20)
            .filter(|v| *v < 10)
            .map(|v| v as u8)
            .collect();
        assert_eq!(decoded, expected);
    }
}
