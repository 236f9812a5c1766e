/// The printable capability and the sample records used by the demos.
///
/// Anything that can render itself as text implements [`Describe`];
/// generic code asks for the capability rather than a concrete type.

pub mod records;

pub use records::{Names, Person, Rectangle};

/// A value that can produce a self-description
pub trait Describe {
    fn describe(&self) -> String;
}

/// Render any describable value.
///
/// Accepts an explicit type argument (`print_input::<Rectangle>(&r)`) or
/// lets the compiler infer it from the argument.
pub fn print_input<E: Describe>(input: &E) -> String {
    input.describe()
}

/// Name of the type the compiler settled on for `value`
pub fn type_name_of<T: ?Sized>(_value: &T) -> &'static str {
    std::any::type_name::<T>()
}

/// Last path segment of each type in a type name, keeping generic brackets
///
/// `alloc::vec::Vec<i32>` becomes `Vec<i32>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();

    for c in full.chars() {
        match c {
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';' => {
                out.push_str(last_segment(&segment));
                segment.clear();
                out.push(c);
            }
            _ => segment.push(c),
        }
    }
    out.push_str(last_segment(&segment));
    out
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Short type name of the value's inferred type
pub fn short_type_of<T: ?Sized>(value: &T) -> String {
    short_type_name(type_name_of(value))
}
