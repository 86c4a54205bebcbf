//! Recursive-descent parser producing the DXL syntax tree.
//!
//! Each `parse_*` method consumes one grammar rule from the token buffer.
//! The first unmet expectation aborts the parse with a single
//! [`Diagnostic`]; there is no recovery and no partial tree.

use std::sync::Arc;

use log::{debug, trace};
use uuid::Uuid;

use dxl_core::{
    ast::{
        Alias, ConceptDeclaration, ConceptReference, ConnectionDeclaration,
        ConnectivityDeclaration, Declaration, DisconnectionDeclaration, Expression, Name,
        OptConnectionDeclaration, OptDocumentation, OptLabel, OptTypeRef, Property, SimpleName,
        TopLevel, TypeRef,
    },
    origin::Located,
    time::{Instant, TimeInterval, parse_instant},
};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    token_buffer::TokenBuffer,
    tokens::{Token, TokenKind},
};

pub(crate) struct Parser<'src> {
    input: TokenBuffer<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(file_name: &str, source: &'src str) -> Self {
        Self {
            input: TokenBuffer::new(Arc::from(file_name), source),
        }
    }

    /// `topLevel := alias* declaration+`
    pub fn parse_top_level(&mut self) -> Result<TopLevel> {
        let aliases = self.parse_aliases()?;
        let declarations = self.parse_declarations()?;

        debug!(
            aliases = aliases.len(),
            declarations = declarations.len();
            "Parsed top level"
        );
        Ok(TopLevel::new(aliases, declarations))
    }

    fn parse_aliases(&mut self) -> Result<Vec<Located<Alias>>> {
        let mut aliases = Vec::new();

        while self.input.has_look_ahead(TokenKind::Alias) {
            let alias_token = self.input.read()?;
            let name = self.parse_simple_name()?;
            self.input.read_kind(TokenKind::As)?;

            let Name::Qualified(qualified_name) = self.parse_qualified_name()? else {
                return Err(self
                    .input
                    .expected("aliased name to be fully qualified")
                    .with_code(ErrorCode::E104)
                    .with_help("alias a dotted name such as `org.example.Person`"));
            };

            trace!(alias = name.name(); "Parsed alias");
            aliases.push(Located::new(
                Alias::new(name, qualified_name),
                self.input.origin(&alias_token),
            ));
        }

        Ok(aliases)
    }

    fn parse_declarations(&mut self) -> Result<Vec<Declaration>> {
        let mut declarations = Vec::new();

        while !self.input.has_look_ahead(TokenKind::EndOfInput) {
            let documentation = self.parse_documentation_opt()?;
            if self.input.has_look_ahead(TokenKind::EndOfInput) {
                return Err(self.missing_declaration());
            }

            let declaration = self.parse_connectivity_declaration(documentation)?;
            declarations.push(Declaration::Connectivity(declaration));
        }

        if declarations.is_empty() {
            return Err(self.missing_declaration());
        }

        Ok(declarations)
    }

    fn missing_declaration(&mut self) -> Diagnostic {
        self.input
            .expected("concept or connection declaration")
            .with_code(ErrorCode::E105)
    }

    fn parse_documentation_opt(&mut self) -> Result<OptDocumentation> {
        if !self.input.has_look_ahead(TokenKind::Documentation) {
            return Ok(OptDocumentation::NoDocumentation);
        }

        let token = self.input.read()?;
        // The scanner keeps the indentation of the line after the block.
        let text = token
            .text
            .trim_end_matches([' ', '\t'])
            .replace("\r\n", "\n");
        Ok(OptDocumentation::Documentation(Located::new(
            text,
            self.input.origin(&token),
        )))
    }

    /// `conceptDeclaration (connection | "no-longer" disconnection)? ";"`
    fn parse_connectivity_declaration(
        &mut self,
        documentation: OptDocumentation,
    ) -> Result<ConnectivityDeclaration> {
        let concept = self.parse_concept_declaration()?;

        let connection = if self.input.has_look_ahead(TokenKind::Semicolon) {
            OptConnectionDeclaration::NoConnection
        } else if self.input.consume_when(TokenKind::NoLonger) {
            OptConnectionDeclaration::Disconnection(self.parse_disconnection_declaration()?)
        } else {
            OptConnectionDeclaration::Connection(self.parse_connection_declaration()?)
        };

        self.input.read_kind(TokenKind::Semicolon)?;

        Ok(ConnectivityDeclaration::new(
            documentation,
            concept,
            connection,
        ))
    }

    fn parse_concept_declaration(&mut self) -> Result<ConceptDeclaration> {
        let reference = self.parse_concept_reference()?;
        let properties = self.parse_properties_opt()?;
        Ok(ConceptDeclaration::new(reference, properties))
    }

    /// `label? typeRef?`, where the type reference is required without a label.
    fn parse_concept_reference(&mut self) -> Result<ConceptReference> {
        let label = self.parse_label_opt()?;

        let type_ref = if label.is_present() {
            if self.input.has_look_ahead(TokenKind::Colon) {
                OptTypeRef::TypeRef(self.parse_type_ref(true)?)
            } else {
                OptTypeRef::NoTypeRef
            }
        } else {
            OptTypeRef::TypeRef(self.parse_type_ref(false)?)
        };

        Ok(ConceptReference::new(label, type_ref))
    }

    fn parse_connection_declaration(&mut self) -> Result<ConnectionDeclaration> {
        let type_ref = TypeRef::new(self.parse_qualified_name()?, false);
        let concept = self.parse_concept_reference()?;
        let valid_time = self.parse_valid_time_opt()?;
        let properties = self.parse_properties_opt()?;

        Ok(ConnectionDeclaration::new(
            type_ref, concept, valid_time, properties,
        ))
    }

    fn parse_disconnection_declaration(&mut self) -> Result<DisconnectionDeclaration> {
        let type_ref = TypeRef::new(self.parse_qualified_name()?, false);
        let concept = self.parse_concept_reference()?;
        let valid_time = self.parse_valid_time_opt()?;

        Ok(DisconnectionDeclaration::new(type_ref, concept, valid_time))
    }

    fn parse_label_opt(&mut self) -> Result<OptLabel> {
        if self.input.has_look_ahead(TokenKind::UuidLiteral) {
            let token = self.input.read()?;
            let uuid = Uuid::parse_str(token.text).map_err(|err| {
                self.input
                    .error_at(&token, ErrorCode::E102, "a valid UUID")
                    .with_help(err.to_string())
            })?;
            return Ok(OptLabel::UuidLabel(Located::new(
                uuid,
                self.input.origin(&token),
            )));
        }

        if self.input.has_look_ahead(TokenKind::SymbolName) {
            return Ok(OptLabel::Name(self.parse_qualified_name()?));
        }

        Ok(OptLabel::NoLabel)
    }

    /// `":" qualifiedName`
    fn parse_type_ref(&mut self, is_for_named_element: bool) -> Result<TypeRef> {
        self.input.read_kind(TokenKind::Colon)?;
        let type_name = self.parse_qualified_name()?;
        Ok(TypeRef::new(type_name, is_for_named_element))
    }

    /// `"with" property ("," property)*`
    fn parse_properties_opt(&mut self) -> Result<Vec<Property>> {
        let mut properties = Vec::new();

        if self.input.consume_when(TokenKind::With) {
            properties.push(self.parse_property()?);
            while self.input.consume_when(TokenKind::Comma) {
                properties.push(self.parse_property()?);
            }
        }

        Ok(properties)
    }

    fn parse_property(&mut self) -> Result<Property> {
        let name = self.parse_simple_name()?;
        self.input.read_kind(TokenKind::Equals)?;
        let value = self.parse_expression()?;
        let valid_time_interval = self.parse_valid_time_interval_opt()?;
        let transaction_time = self.parse_transaction_time_opt()?;

        Ok(Property::new(
            name,
            value,
            valid_time_interval,
            transaction_time,
        ))
    }

    fn parse_expression(&mut self) -> Result<Located<Expression>> {
        let Some(next) = self.input.look_ahead(1) else {
            return Err(self.input.expected("expression"));
        };

        let text = next.text.to_string();
        let expression = match next.kind {
            TokenKind::Absent => Expression::Absent,
            TokenKind::BooleanLiteral => Expression::Boolean(text),
            TokenKind::CharacterLiteral => Expression::Character(text),
            TokenKind::DateLiteral => Expression::Date(text),
            TokenKind::DateTimeLiteral => Expression::DateTime(text),
            TokenKind::FloatingPointLiteral => Expression::FloatingPoint(text),
            TokenKind::IntegerLiteral => Expression::Integer(text),
            TokenKind::StringLiteral => Expression::String(text),
            TokenKind::TimeLiteral => Expression::Time(text),
            TokenKind::UrlLiteral => Expression::Url(text),
            TokenKind::UuidLiteral => Expression::Uuid(text),
            _ => return Err(self.input.expected("expression")),
        };

        let token = self.input.read()?;
        Ok(Located::new(expression, self.input.origin(&token)))
    }

    /// `simpleName ("." simpleName)*`, continuing only when a name follows
    /// the dot.
    fn parse_qualified_name(&mut self) -> Result<Name> {
        let mut names = Vec::new();

        loop {
            names.push(self.parse_simple_name()?);
            if !self.input.has_look_ahead_at(2, TokenKind::SymbolName)
                || !self.input.consume_when(TokenKind::Dot)
            {
                break;
            }
        }

        Name::from_segments(names).ok_or_else(|| self.input.expected("name"))
    }

    fn parse_simple_name(&mut self) -> Result<SimpleName> {
        let token = self.input.read_kind(TokenKind::SymbolName)?;
        Ok(SimpleName::new(token.text, self.input.origin(&token)))
    }

    fn parse_valid_time_opt(&mut self) -> Result<Option<Instant>> {
        if !self.input.consume_when(TokenKind::ValidAsOf) {
            return Ok(None);
        }

        let token = self.input.read_kind(TokenKind::DateTimeLiteral)?;
        self.instant(&token).map(Some)
    }

    /// `"valid-as-of" instant | "valid-during" instant ".." instant`
    fn parse_valid_time_interval_opt(&mut self) -> Result<Option<TimeInterval>> {
        if self.input.consume_when(TokenKind::ValidAsOf) {
            let token = self.input.read_kind(TokenKind::DateTimeLiteral)?;
            let start = self.instant(&token)?;
            let interval = TimeInterval::starting_at(start).map_err(|err| {
                self.input
                    .error_at(&token, ErrorCode::E103, "a start before the end of time")
                    .with_help(err.to_string())
            })?;
            return Ok(Some(interval));
        }

        if self.input.consume_when(TokenKind::ValidDuring) {
            let start_token = self.input.read_kind(TokenKind::DateTimeLiteral)?;
            let start = self.instant(&start_token)?;
            self.input.read_kind(TokenKind::DoubleDot)?;
            let end_token = self.input.read_kind(TokenKind::DateTimeLiteral)?;
            let end = self.instant(&end_token)?;

            let interval = TimeInterval::new(start, end).map_err(|err| {
                self.input
                    .error_at(&end_token, ErrorCode::E103, "interval end after its start")
                    .with_secondary_label(start_token.span, "interval starts here")
                    .with_help(err.to_string())
            })?;
            return Ok(Some(interval));
        }

        Ok(None)
    }

    fn parse_transaction_time_opt(&mut self) -> Result<Option<Instant>> {
        if !self.input.consume_when(TokenKind::TransactedAt) {
            return Ok(None);
        }

        let token = self.input.read_kind(TokenKind::DateTimeLiteral)?;
        self.instant(&token).map(Some)
    }

    /// The instant of a `|date-time|` token.
    fn instant(&self, token: &Token<'_>) -> Result<Instant> {
        let text = token
            .text
            .strip_prefix('|')
            .and_then(|text| text.strip_suffix('|'))
            .unwrap_or(token.text);

        parse_instant(text).map_err(|err| self.invalid_instant(token, &err.to_string()))
    }

    fn invalid_instant(&self, token: &Token<'_>, reason: &str) -> Diagnostic {
        self.input
            .error_at(token, ErrorCode::E102, "an RFC 3339 instant")
            .with_help(format!(
                "{reason}; write instants with seconds and a zone, e.g. `|2021-06-01T10:15:30Z|`"
            ))
    }
}
