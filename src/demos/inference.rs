/**
Inference for locals, literals and return values

None of the bindings here carry annotations. The printed types are
whatever the compiler chose: integer literals fall back to `i32`, float
literals to `f64`, and tuple destructuring takes its types from the
callee's signature.
*/

use crate::describe::{Person, short_type_of, type_name_of};
use crate::error::DemoResult;
use std::collections::BTreeMap;
use std::io::Write;

/// Complex number with components of one numeric type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

/// Build a complex number; the component type is inferred from the arguments
pub fn complex<T>(re: T, im: T) -> Complex<T> {
    Complex { re, im }
}

pub fn trivial(out: &mut dyn Write) -> DemoResult<()> {
    let x = 42;
    writeln!(out, "Value: {}, Type: {}", x, type_name_of(&x))?;
    Ok(())
}

#[allow(clippy::approx_constant)]
pub fn local(out: &mut dyn Write) -> DemoResult<()> {
    let x = 42;
    let y = 3.14;
    let z = complex(2.0, 3.0);

    writeln!(
        out,
        "x: {}, y: {}, z: {}",
        short_type_of(&x),
        short_type_of(&y),
        short_type_of(&z)
    )?;
    Ok(())
}

pub fn composite(out: &mut dyn Write) -> DemoResult<()> {
    let p = Person::new("Bob", 40);
    let nums = vec![1, 2, 3];
    let settings = BTreeMap::from([("dark_mode", true)]);

    writeln!(
        out,
        "p: {}, nums: {}, settings: {}",
        short_type_of(&p),
        short_type_of(&nums),
        short_type_of(&settings)
    )?;
    Ok(())
}

/// Two values of different types from one call
pub fn get_name_and_age() -> (&'static str, u32) {
    ("Alice", 30)
}

pub fn return_values(out: &mut dyn Write) -> DemoResult<()> {
    let (name, age) = get_name_and_age();
    writeln!(
        out,
        "name: {}, age: {}",
        short_type_of(&name),
        short_type_of(&age)
    )?;
    Ok(())
}
