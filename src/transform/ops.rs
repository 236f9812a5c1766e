/// Ready-made element transforms exposed through the CLI `map` command
use super::{map, try_map};
use crate::error::{DemoError, DemoResult};

/// Element transform applied to each input word
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MapOp {
    /// Length of each word in bytes
    Len,
    /// Uppercase each word
    Upper,
    /// Parse each word as an integer and square it
    Square,
    /// Parse each word as an integer and add one
    Increment,
}

impl MapOp {
    /// Run this operation over `words`, rendering each result as text
    pub fn apply(self, words: &[String]) -> DemoResult<Vec<String>> {
        log::debug!("applying {:?} to {} word(s)", self, words.len());

        match self {
            MapOp::Len => Ok(map(words, |w| w.len().to_string())),
            MapOp::Upper => Ok(map(words, |w| w.to_uppercase())),
            MapOp::Square => integer_op(words, |n| n.checked_mul(n)),
            MapOp::Increment => integer_op(words, |n| n.checked_add(1)),
        }
    }
}

/// Parse each word as an integer and apply `f`, failing on bad input or overflow
fn integer_op<F>(words: &[String], f: F) -> DemoResult<Vec<String>>
where
    F: Fn(i64) -> Option<i64>,
{
    let mut index = 0;
    try_map(words, |w| {
        let position = index;
        index += 1;

        let n = w.trim().parse::<i64>().map_err(|_| DemoError::InvalidNumber {
            value: w.clone(),
            index: position,
        })?;
        f(n)
            .map(|result| result.to_string())
            .ok_or_else(|| DemoError::Overflow {
                value: w.clone(),
                index: position,
            })
    })
}

/// Render a list of results the way `Debug` prints a vector of numbers
pub fn render_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}
