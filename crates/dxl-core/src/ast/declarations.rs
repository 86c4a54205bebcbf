//! Top-level structure and declarations.

use crate::{
    ast::{OptLabel, OptTypeRef, Property, QualifiedName, SimpleName, TypeRef},
    origin::{HasOrigin, Located, NULL_ORIGIN, Origin, first_origin},
    time::Instant,
};

/// The root of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevel {
    aliases: Vec<Located<Alias>>,
    declarations: Vec<Declaration>,
}

impl TopLevel {
    pub fn new(aliases: Vec<Located<Alias>>, declarations: Vec<Declaration>) -> Self {
        Self {
            aliases,
            declarations,
        }
    }

    pub fn aliases(&self) -> &[Located<Alias>] {
        &self.aliases
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }
}

impl HasOrigin for TopLevel {
    fn origin(&self) -> &Origin {
        match self.aliases.first() {
            Some(alias) => alias.origin(),
            None => first_origin(&self.declarations),
        }
    }
}

/// `alias NAME as QUALIFIED.NAME`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    name: SimpleName,
    qualified_name: QualifiedName,
}

impl Alias {
    pub fn new(name: SimpleName, qualified_name: QualifiedName) -> Self {
        Self {
            name,
            qualified_name,
        }
    }

    pub fn name(&self) -> &SimpleName {
        &self.name
    }

    pub fn qualified_name(&self) -> &QualifiedName {
        &self.qualified_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Connectivity(ConnectivityDeclaration),
}

impl HasOrigin for Declaration {
    fn origin(&self) -> &Origin {
        match self {
            Declaration::Connectivity(declaration) => declaration.origin(),
        }
    }
}

/// A concept, optionally connected to or disconnected from another concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityDeclaration {
    documentation: OptDocumentation,
    concept: ConceptDeclaration,
    connection: OptConnectionDeclaration,
}

impl ConnectivityDeclaration {
    pub fn new(
        documentation: OptDocumentation,
        concept: ConceptDeclaration,
        connection: OptConnectionDeclaration,
    ) -> Self {
        Self {
            documentation,
            concept,
            connection,
        }
    }

    pub fn documentation(&self) -> &OptDocumentation {
        &self.documentation
    }

    pub fn concept(&self) -> &ConceptDeclaration {
        &self.concept
    }

    pub fn connection(&self) -> &OptConnectionDeclaration {
        &self.connection
    }
}

impl HasOrigin for ConnectivityDeclaration {
    fn origin(&self) -> &Origin {
        match &self.documentation {
            OptDocumentation::Documentation(text) => text.origin(),
            OptDocumentation::NoDocumentation => self.concept.origin(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptDeclaration {
    reference: ConceptReference,
    properties: Vec<Property>,
}

impl ConceptDeclaration {
    pub fn new(reference: ConceptReference, properties: Vec<Property>) -> Self {
        Self {
            reference,
            properties,
        }
    }

    pub fn reference(&self) -> &ConceptReference {
        &self.reference
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

impl HasOrigin for ConceptDeclaration {
    fn origin(&self) -> &Origin {
        self.reference.origin()
    }
}

/// A concept identified by a label, a type reference, or both.
///
/// Without a label the type reference is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptReference {
    label: OptLabel,
    type_ref: OptTypeRef,
}

impl ConceptReference {
    pub fn new(label: OptLabel, type_ref: OptTypeRef) -> Self {
        Self { label, type_ref }
    }

    pub fn label(&self) -> &OptLabel {
        &self.label
    }

    pub fn type_ref(&self) -> &OptTypeRef {
        &self.type_ref
    }
}

impl HasOrigin for ConceptReference {
    fn origin(&self) -> &Origin {
        if self.label.is_present() {
            self.label.origin()
        } else {
            self.type_ref.origin()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptConnectionDeclaration {
    NoConnection,
    Connection(ConnectionDeclaration),
    Disconnection(DisconnectionDeclaration),
}

impl HasOrigin for OptConnectionDeclaration {
    fn origin(&self) -> &Origin {
        match self {
            OptConnectionDeclaration::NoConnection => &NULL_ORIGIN,
            OptConnectionDeclaration::Connection(connection) => connection.origin(),
            OptConnectionDeclaration::Disconnection(disconnection) => disconnection.origin(),
        }
    }
}

/// `TYPE concept [valid-as-of |instant|] [with ...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDeclaration {
    type_ref: TypeRef,
    concept: ConceptReference,
    valid_time: Option<Instant>,
    properties: Vec<Property>,
}

impl ConnectionDeclaration {
    pub fn new(
        type_ref: TypeRef,
        concept: ConceptReference,
        valid_time: Option<Instant>,
        properties: Vec<Property>,
    ) -> Self {
        Self {
            type_ref,
            concept,
            valid_time,
            properties,
        }
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub fn concept(&self) -> &ConceptReference {
        &self.concept
    }

    pub fn valid_time(&self) -> Option<&Instant> {
        self.valid_time.as_ref()
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

impl HasOrigin for ConnectionDeclaration {
    fn origin(&self) -> &Origin {
        self.type_ref.origin()
    }
}

/// `no-longer TYPE concept [valid-as-of |instant|]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisconnectionDeclaration {
    type_ref: TypeRef,
    concept: ConceptReference,
    valid_time: Option<Instant>,
}

impl DisconnectionDeclaration {
    pub fn new(type_ref: TypeRef, concept: ConceptReference, valid_time: Option<Instant>) -> Self {
        Self {
            type_ref,
            concept,
            valid_time,
        }
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub fn concept(&self) -> &ConceptReference {
        &self.concept
    }

    pub fn valid_time(&self) -> Option<&Instant> {
        self.valid_time.as_ref()
    }
}

impl HasOrigin for DisconnectionDeclaration {
    fn origin(&self) -> &Origin {
        self.type_ref.origin()
    }
}

/// A `#` documentation block. The text keeps the `#` markers and the line
/// breaks of a multi-line block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptDocumentation {
    NoDocumentation,
    Documentation(Located<String>),
}
