/**
Demonstration drivers

Each demo builds a few sample values, lets the compiler infer their types,
and writes what it settled on to the given output. Demos share no state
and can run in any order.

## Registered demos

| name                 | shows                                            |
|----------------------|--------------------------------------------------|
| `trivial`            | a single integer literal and its type            |
| `local`              | literal inference for locals                     |
| `composite`          | struct, vector and map literals                  |
| `return-values`      | destructuring a tuple return                     |
| `generic-function`   | `map` with and without explicit type arguments   |
| `generic-format`     | numeric generics passed through a callback       |
| `explicit-type-args` | calling a capability-bound generic with turbofish|
| `unified-params`     | two arguments sharing one type parameter         |
*/

pub mod generics;
pub mod inference;

use crate::error::{DemoError, DemoResult};
use std::io::Write;

/// Signature every demo driver has
pub type DemoFn = fn(&mut dyn Write) -> DemoResult<()>;

/// A registered demonstration
#[derive(Debug, Clone, Copy)]
pub struct Demo {
    pub name: &'static str,
    pub summary: &'static str,
    pub run: DemoFn,
}

/// All demos, in the order `run_all` executes them
pub static DEMOS: &[Demo] = &[
    Demo {
        name: "trivial",
        summary: "Value and type of an integer literal",
        run: inference::trivial,
    },
    Demo {
        name: "local",
        summary: "Types inferred for integer, float and complex locals",
        run: inference::local,
    },
    Demo {
        name: "composite",
        summary: "Types inferred for struct, vector and map literals",
        run: inference::composite,
    },
    Demo {
        name: "return-values",
        summary: "Types inferred when destructuring a multi-value return",
        run: inference::return_values,
    },
    Demo {
        name: "generic-function",
        summary: "Map over a named sequence, explicit and inferred type arguments",
        run: generics::generic_function,
    },
    Demo {
        name: "generic-format",
        summary: "Numeric generics threaded through a formatter callback",
        run: generics::generic_format,
    },
    Demo {
        name: "explicit-type-args",
        summary: "Describe a rectangle through an explicitly instantiated generic",
        run: generics::explicit_type_args,
    },
    Demo {
        name: "unified-params",
        summary: "Two arguments bound to a single type parameter",
        run: generics::unified_params,
    },
];

/// Look up a demo by name
pub fn find_demo(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|d| d.name == name)
}

/// Run one demo by name
pub fn run_demo(name: &str, out: &mut dyn Write) -> DemoResult<()> {
    let demo = find_demo(name).ok_or_else(|| DemoError::UnknownDemo {
        name: name.to_string(),
    })?;
    log::debug!("running demo '{}'", demo.name);
    (demo.run)(out)
}

/// Run every registered demo, each under a `== name ==` header
pub fn run_all(out: &mut dyn Write) -> DemoResult<()> {
    for demo in DEMOS {
        writeln!(out, "== {} ==", demo.name)?;
        log::debug!("running demo '{}'", demo.name);
        (demo.run)(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(name: &str) -> String {
        let mut buf = Vec::new();
        run_demo(name, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in DEMOS.iter().enumerate() {
            for b in &DEMOS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_find_demo() {
        assert!(find_demo("local").is_some());
        assert!(find_demo("Local").is_none());
    }

    #[test]
    fn test_unknown_demo() {
        let mut buf = Vec::new();
        let err = run_demo("does-not-exist", &mut buf).unwrap_err();
        assert!(matches!(err, DemoError::UnknownDemo { ref name } if name == "does-not-exist"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_trivial_output() {
        assert_eq!(capture("trivial"), "Value: 42, Type: i32\n");
    }

    #[test]
    fn test_run_all_headers_in_order() {
        let mut buf = Vec::new();
        run_all(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut last = 0;
        for demo in DEMOS {
            let header = format!("== {} ==", demo.name);
            let pos = text.find(&header).unwrap();
            assert!(pos >= last);
            last = pos;
        }
    }
}
