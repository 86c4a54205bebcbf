//! Names, labels and type references.

use std::fmt;

use uuid::Uuid;

use crate::origin::{HasOrigin, Located, NULL_ORIGIN, Origin};

/// A single symbol name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleName(Located<String>);

impl SimpleName {
    pub fn new(name: impl Into<String>, origin: Origin) -> Self {
        Self(Located::new(name.into(), origin))
    }

    pub fn unlocated(name: impl Into<String>) -> Self {
        Self::new(name, Origin::Null)
    }

    pub fn name(&self) -> &str {
        self.0.inner()
    }
}

impl HasOrigin for SimpleName {
    fn origin(&self) -> &Origin {
        self.0.origin()
    }
}

impl fmt::Display for SimpleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dotted name with at least two segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    names: Vec<SimpleName>,
}

impl QualifiedName {
    /// Builds a qualified name, or `None` when fewer than two segments are given.
    pub fn new(names: Vec<SimpleName>) -> Option<Self> {
        (names.len() >= 2).then_some(Self { names })
    }

    pub fn names(&self) -> &[SimpleName] {
        &self.names
    }

    /// The segments joined with `.`.
    pub fn text(&self) -> String {
        self.names
            .iter()
            .map(SimpleName::name)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl HasOrigin for QualifiedName {
    fn origin(&self) -> &Origin {
        crate::origin::first_origin(&self.names)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// A simple or qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Name {
    Simple(SimpleName),
    Qualified(QualifiedName),
}

impl Name {
    /// Builds a name from its segments; one segment collapses to
    /// [`Name::Simple`]. Returns `None` for no segments.
    pub fn from_segments(mut names: Vec<SimpleName>) -> Option<Self> {
        match names.len() {
            0 => None,
            1 => names.pop().map(Name::Simple),
            _ => QualifiedName::new(names).map(Name::Qualified),
        }
    }

    pub fn text(&self) -> String {
        match self {
            Name::Simple(name) => name.name().to_string(),
            Name::Qualified(name) => name.text(),
        }
    }
}

impl HasOrigin for Name {
    fn origin(&self) -> &Origin {
        match self {
            Name::Simple(name) => name.origin(),
            Name::Qualified(name) => name.origin(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Name::Simple(name) => name.fmt(f),
            Name::Qualified(name) => name.fmt(f),
        }
    }
}

/// The identifying label of a concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptLabel {
    NoLabel,
    /// A quoted label. No grammar rule reads one, but it can be constructed
    /// and rendered.
    StringLabel(Located<String>),
    UuidLabel(Located<Uuid>),
    Name(Name),
}

impl OptLabel {
    pub fn is_present(&self) -> bool {
        !matches!(self, OptLabel::NoLabel)
    }
}

impl HasOrigin for OptLabel {
    fn origin(&self) -> &Origin {
        match self {
            OptLabel::NoLabel => &NULL_ORIGIN,
            OptLabel::StringLabel(text) => text.origin(),
            OptLabel::UuidLabel(uuid) => uuid.origin(),
            OptLabel::Name(name) => name.origin(),
        }
    }
}

/// A `:`-introduced reference to a type.
///
/// `is_for_named_element` records whether the reference followed a label,
/// which decides whether the colon is followed by a space when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    type_name: Name,
    is_for_named_element: bool,
}

impl TypeRef {
    pub fn new(type_name: Name, is_for_named_element: bool) -> Self {
        Self {
            type_name,
            is_for_named_element,
        }
    }

    pub fn type_name(&self) -> &Name {
        &self.type_name
    }

    pub fn is_for_named_element(&self) -> bool {
        self.is_for_named_element
    }
}

impl HasOrigin for TypeRef {
    fn origin(&self) -> &Origin {
        self.type_name.origin()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptTypeRef {
    NoTypeRef,
    TypeRef(TypeRef),
}

impl OptTypeRef {
    pub fn is_present(&self) -> bool {
        !matches!(self, OptTypeRef::NoTypeRef)
    }
}

impl HasOrigin for OptTypeRef {
    fn origin(&self) -> &Origin {
        match self {
            OptTypeRef::NoTypeRef => &NULL_ORIGIN,
            OptTypeRef::TypeRef(type_ref) => type_ref.origin(),
        }
    }
}
