/**
Ordered-sequence transform

`map` applies a function to every element of a slice and collects the
results into a fresh vector. Order and length are preserved and the input
is only ever borrowed.

```
use inferdemo::map;

let names = ["Alice", "Bob", "Charlie"];
let lengths = map(&names, |s| s.len());
assert_eq!(lengths, vec![5, 3, 7]);
```
*/

pub mod ops;

pub use ops::{MapOp, render_list};

/// Apply `f` to each element of `input`, in order.
///
/// The output always has exactly `input.len()` elements and
/// `output[i] == f(&input[i])`.
pub fn map<E, R, F>(input: &[E], mut f: F) -> Vec<R>
where
    F: FnMut(&E) -> R,
{
    log::trace!("map over {} element(s)", input.len());

    let mut result = Vec::with_capacity(input.len());
    for value in input {
        result.push(f(value));
    }
    result
}

/// Fallible variant of [`map`].
///
/// Stops at the first element for which `f` fails and returns that error.
/// Elements after the failing one are never visited and no partial output
/// is handed back.
pub fn try_map<E, R, Err, F>(input: &[E], mut f: F) -> Result<Vec<R>, Err>
where
    F: FnMut(&E) -> Result<R, Err>,
{
    let mut result = Vec::with_capacity(input.len());
    for (index, value) in input.iter().enumerate() {
        match f(value) {
            Ok(mapped) => result.push(mapped),
            Err(e) => {
                log::debug!("try_map stopped at index {}", index);
                return Err(e);
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_lengths() {
        let names = vec!["Alice".to_string(), "Bob".to_string(), "Charlie".to_string()];
        let lengths = map(&names, |s| s.len());
        assert_eq!(lengths, vec![5, 3, 7]);
    }

    #[test]
    fn test_squares() {
        assert_eq!(map(&[1, 2, 3], |x| x * x), vec![1, 4, 9]);
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<i32> = Vec::new();
        let result = map(&empty, |x| x + 1);
        assert!(result.is_empty());
    }

    #[test]
    fn test_identity_preserves_elements() {
        let input = vec![3, 1, 4, 1, 5, 9, 2, 6];
        let result = map(&input, |x| *x);
        assert_eq!(result, input);
    }

    #[test]
    fn test_input_untouched() {
        let input = vec!["a".to_string(), "bb".to_string()];
        let before = input.clone();
        let _ = map(&input, |s| format!("{}!", s));
        assert_eq!(input, before);
    }

    #[test]
    fn test_length_and_pointwise() {
        let input: Vec<i64> = (-50..50).collect();
        let f = |x: &i64| x * 3 - 7;
        let result = map(&input, f);
        assert_eq!(result.len(), input.len());
        for (i, value) in input.iter().enumerate() {
            assert_eq!(result[i], f(value));
        }
    }

    #[test]
    fn test_changes_element_type() {
        let result = map(&[1u8, 2, 3], |x| x.to_string());
        assert_eq!(result, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_calls_in_order() {
        let mut seen = Vec::new();
        let _ = map(&['a', 'b', 'c'], |c| seen.push(*c));
        assert_eq!(seen, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_try_map_ok() {
        let words = ["1", "22", "333"];
        let parsed: Result<Vec<u32>, _> = try_map(&words, |s| s.parse::<u32>());
        assert_eq!(parsed, Ok(vec![1, 22, 333]));
    }

    #[test]
    fn test_try_map_stops_at_first_error() {
        let words = ["1", "oops", "3", "nope"];
        let mut visited = 0;
        let result: Result<Vec<u32>, String> = try_map(&words, |s| {
            visited += 1;
            s.parse::<u32>().map_err(|_| format!("bad: {}", s))
        });
        assert_eq!(result, Err("bad: oops".to_string()));
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_try_map_empty() {
        let empty: [i32; 0] = [];
        let result: Result<Vec<i32>, ()> = try_map(&empty, |x| Ok(x + 1));
        assert_eq!(result, Ok(vec![]));
    }
}
