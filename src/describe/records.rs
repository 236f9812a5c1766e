use super::Describe;
use std::fmt;
use std::ops::Deref;

/// A named pair record
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Person {
            name: name.into(),
            age,
        }
    }
}

impl Describe for Person {
    fn describe(&self) -> String {
        format!("Person(name={}, age={})", self.name, self.age)
    }
}

/// Rectangle with integer sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub width: i64,
    pub height: i64,
}

impl Describe for Rectangle {
    fn describe(&self) -> String {
        format!("Rectangle(width={}, height={})", self.width, self.height)
    }
}

/// A named sequence of strings.
///
/// Derefs to `[String]` so it can be handed straight to [`crate::map`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Names(pub Vec<String>);

impl Names {
    pub fn from_strs(names: &[&str]) -> Self {
        Names(names.iter().map(|s| s.to_string()).collect())
    }
}

impl Deref for Names {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Names {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", name)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_deref() {
        let names = Names::from_strs(&["Alice", "Bob"]);
        assert_eq!(names.len(), 2);
        assert_eq!(names[1], "Bob");
        assert_eq!(names.to_string(), "[Alice Bob]");
    }
}
