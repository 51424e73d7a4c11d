//! Inline CSS declarations for rendered elements.

use maud::Render;
use std::fmt;

/// Ordered set of CSS declarations rendered into a `style` attribute.
///
/// Setting a property that is already present replaces its value in place,
/// so spreading one style into another keeps the position of the first
/// occurrence and the value of the last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    declarations: Vec<(&'static str, String)>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any earlier value for it.
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Copies every declaration of `other` into this style.
    pub fn spread(self, other: &Style) -> Self {
        other
            .declarations
            .iter()
            .fold(self, |style, (property, value)| style.set(property, value.clone()))
    }

    /// Returns the value of a property if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", property, value)?;
        }
        Ok(())
    }
}

impl Render for Style {
    fn render_to(&self, buffer: &mut String) {
        self.to_string().as_str().render_to(buffer);
    }
}
