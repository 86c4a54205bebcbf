//! The DXL syntax tree.
//!
//! Nodes are built once by the parser (or directly by tests) and are
//! read-only afterwards. Optional parts are explicit "absent" variants
//! ([`OptLabel::NoLabel`], [`OptTypeRef::NoTypeRef`],
//! [`OptConnectionDeclaration::NoConnection`],
//! [`OptDocumentation::NoDocumentation`]) so every consumer matches them
//! exhaustively.
//!
//! Equality compares content only; origins are carried in
//! [`Located`](crate::origin::Located) wrappers or derived from children.

mod declarations;
mod names;
mod properties;

pub use declarations::{
    Alias, ConceptDeclaration, ConceptReference, ConnectionDeclaration, ConnectivityDeclaration,
    Declaration, DisconnectionDeclaration, OptConnectionDeclaration, OptDocumentation, TopLevel,
};
pub use names::{Name, OptLabel, OptTypeRef, QualifiedName, SimpleName, TypeRef};
pub use properties::{Expression, Property};
