//! Source origins for syntax tree nodes.
//!
//! An [`Origin`] records where in a named source a node was read from. It is
//! diagnostic metadata only: [`Located<T>`] pairs a value with its origin and
//! compares by value alone, so two trees parsed from differently formatted
//! text are equal when their content is.

use std::{fmt, ops::Deref, sync::Arc};

/// The origin shared by every node that was not read from source text.
pub static NULL_ORIGIN: Origin = Origin::Null;

/// Where a syntax tree node came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Synthetic or test-constructed node.
    #[default]
    Null,

    /// A position inside a named source; line and column are 1-based.
    Source {
        file_name: Arc<str>,
        line: u32,
        column: u32,
    },
}

impl Origin {
    /// Creates an origin pointing into the named source.
    pub fn new(file_name: impl Into<Arc<str>>, line: u32, column: u32) -> Self {
        Self::Source {
            file_name: file_name.into(),
            line,
            column,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Origin::Null)
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            Origin::Null => None,
            Origin::Source { file_name, .. } => Some(file_name),
        }
    }

    pub fn line(&self) -> Option<u32> {
        match self {
            Origin::Null => None,
            Origin::Source { line, .. } => Some(*line),
        }
    }

    pub fn column(&self) -> Option<u32> {
        match self {
            Origin::Null => None,
            Origin::Source { column, .. } => Some(*column),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Null => write!(f, "<unknown origin>"),
            Origin::Source {
                file_name,
                line,
                column,
            } => write!(f, "{file_name} ({line},{column})"),
        }
    }
}

/// Implemented by every syntax tree node.
pub trait HasOrigin {
    /// Returns the origin of this node, [`Origin::Null`] for synthetic nodes.
    fn origin(&self) -> &Origin;
}

/// Returns the origin of the first element of a sequence, or the null origin
/// for an empty one.
pub fn first_origin<T: HasOrigin>(items: &[T]) -> &Origin {
    items.first().map_or(&NULL_ORIGIN, HasOrigin::origin)
}

/// A value together with the origin it was read from.
#[derive(Debug, Clone, Default)]
pub struct Located<T> {
    value: T,
    origin: Origin,
}

impl<T> Located<T> {
    pub fn new(value: T, origin: Origin) -> Self {
        Self { value, origin }
    }

    /// Wraps a value that has no source position.
    pub fn unlocated(value: T) -> Self {
        Self::new(value, Origin::Null)
    }

    pub fn inner(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Transforms the value, keeping the origin.
    pub fn map<F, U>(self, f: F) -> Located<U>
    where
        F: FnOnce(T) -> U,
    {
        Located {
            value: f(self.value),
            origin: self.origin,
        }
    }
}

impl<T> HasOrigin for Located<T> {
    fn origin(&self) -> &Origin {
        &self.origin
    }
}

impl<T> Deref for Located<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T: fmt::Display> fmt::Display for Located<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

// Origins never take part in equality.
impl<T: PartialEq> PartialEq for Located<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value.eq(&other.value)
    }
}

impl<T: Eq> Eq for Located<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_display() {
        let origin = Origin::new("people.dxl", 3, 14);
        assert_eq!(origin.to_string(), "people.dxl (3,14)");
        assert_eq!(Origin::Null.to_string(), "<unknown origin>");
    }

    #[test]
    fn test_origin_accessors() {
        let origin = Origin::new("a.dxl", 1, 2);
        assert_eq!(origin.file_name(), Some("a.dxl"));
        assert_eq!(origin.line(), Some(1));
        assert_eq!(origin.column(), Some(2));
        assert!(!origin.is_null());

        assert!(Origin::default().is_null());
        assert_eq!(Origin::Null.line(), None);
    }

    #[test]
    fn test_located_equality_ignores_origin() {
        let a = Located::new("x".to_string(), Origin::new("a.dxl", 1, 1));
        let b = Located::new("x".to_string(), Origin::new("b.dxl", 7, 9));
        let c = Located::unlocated("y".to_string());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_located_map_keeps_origin() {
        let located = Located::new(21, Origin::new("n.dxl", 2, 5));
        let doubled = located.map(|n| n * 2);

        assert_eq!(*doubled, 42);
        assert_eq!(doubled.origin().line(), Some(2));
    }

    #[test]
    fn test_first_origin() {
        let items = vec![
            Located::new(1, Origin::new("f.dxl", 4, 1)),
            Located::new(2, Origin::new("f.dxl", 5, 1)),
        ];
        assert_eq!(first_origin(&items).line(), Some(4));

        let empty: Vec<Located<i32>> = Vec::new();
        assert!(first_origin(&empty).is_null());
    }
}
