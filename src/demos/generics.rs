/**
Generic functions with and without explicit type arguments

Every call here appears twice: once with a turbofish spelling out each
type parameter, once leaving the compiler to infer them from the
arguments. Both forms produce identical output.
*/

use crate::describe::{Names, Rectangle, print_input};
use crate::error::DemoResult;
use crate::transform::map;
use std::fmt::Display;
use std::io::Write;

/// Numbers that `formatter_function` can scale
pub trait Numeric: Copy + Display {
    fn scale(self, factor: u8) -> Self;
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn scale(self, factor: u8) -> Self {
                    self * (factor as $t)
                }
            }
        )*
    };
}

impl_numeric!(i32, i64, f32, f64);

/// Double the first value and triple the second
pub fn formatter_function<X: Numeric, Y: Numeric>(x: X, y: Y) -> (X, Y) {
    (x.scale(2), y.scale(3))
}

/// Run `formatter` over the pair and render the result
pub fn format_values<V, B, F>(a: V, b: B, formatter: F) -> String
where
    V: Numeric,
    B: Numeric,
    F: Fn(V, B) -> (V, B),
{
    let (x, y) = formatter(a, b);
    format!("Value 1: {}, Value 2: {}", x, y)
}

pub fn generic_function(out: &mut dyn Write) -> DemoResult<()> {
    let names = Names::from_strs(&["Alice", "Bob", "Charlie"]);

    let to_lengths: fn(&String) -> usize = |s| s.len();
    let lengths: Vec<usize> = map::<String, usize, fn(&String) -> usize>(&names, to_lengths);
    writeln!(out, "Without type inference: {:?}", lengths)?;

    let lengths2 = map(&names, |s| s.len());
    writeln!(out, "With type inference:    {:?}", lengths2)?;
    Ok(())
}

pub fn generic_format(out: &mut dyn Write) -> DemoResult<()> {
    let out1 = format_values::<i64, f32, _>(1, 2.0, formatter_function::<i64, f32>);
    let out2 = format_values(1, 2, formatter_function);

    writeln!(out, "{}", out1)?;
    writeln!(out, "{}", out2)?;
    Ok(())
}

pub fn explicit_type_args(out: &mut dyn Write) -> DemoResult<()> {
    let x = Rectangle {
        width: 2,
        height: 3,
    };

    writeln!(out, "print_input::<Rectangle>: {}", print_input::<Rectangle>(&x))?;
    writeln!(out, "print_input:              {}", print_input(&x))?;
    Ok(())
}

/// Both arguments must share the single type parameter `Q`
pub fn pair<Q: Display>(a: Q, b: Q) -> String {
    format!("{} {}", a, b)
}

#[allow(clippy::approx_constant)]
pub fn unified_params(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "{}", pair(1.0, 3.14))?;
    writeln!(out, "{}", pair("left", "right"))?;
    // pair(1, "test") is rejected at compile time: Q cannot be both an
    // integer and &str.
    writeln!(out, "pair(1, \"test\") does not compile: arguments disagree on Q")?;
    Ok(())
}
