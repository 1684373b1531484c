//! Presentation of vector positionals.

use std::fmt::Display;

/// How a sequence of values is laid out in program output.
///
/// Both modifiers only affect the rendered text. The bound values keep their input order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Presentation {
    /// Sort the values lexicographically (stable) by their canonical text.
    pub sorted: bool,

    /// Put each value on its own line instead of separating them with a space.
    pub line_per_value: bool,
}

impl Presentation {
    /// Render the values. The result has no trailing newline.
    pub fn render<T: Display>(&self, values: &[T]) -> String {
        let mut items: Vec<String> = values.iter().map(ToString::to_string).collect();

        if self.sorted {
            items.sort();
        }

        let separator = if self.line_per_value { "\n" } else { " " };
        items.join(separator)
    }
}
