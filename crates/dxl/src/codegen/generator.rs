//! Canonical rendering of a syntax tree.
//!
//! Every node kind has one fixed layout. A declaration stays on one line
//! unless it carries properties; then each property sits on its own indented
//! line and the closing `;` moves to a line of its own.

use dxl_core::{
    ast::{
        Alias, ConceptDeclaration, ConceptReference, ConnectionDeclaration,
        ConnectivityDeclaration, Declaration, DisconnectionDeclaration, OptConnectionDeclaration,
        OptDocumentation, OptLabel, OptTypeRef, Property, TopLevel, TypeRef,
    },
    origin::Located,
    time::{Instant, TimeInterval, format_instant},
};

use super::writer::CodeWriter;

/// Renders `top_level` as canonical DXL text, indenting with `indent_unit`.
///
/// The result always ends with exactly one line feed.
pub fn generate(top_level: &TopLevel, indent_unit: &str) -> String {
    let mut out = CodeWriter::new(indent_unit);
    write_top_level(&mut out, top_level);
    out.finish()
}

fn write_top_level(out: &mut CodeWriter, top_level: &TopLevel) {
    for alias in top_level.aliases() {
        write_alias(out, alias);
    }
    if !top_level.aliases().is_empty() {
        out.append_new_line();
    }

    for declaration in top_level.declarations() {
        write_declaration(out, declaration);
        out.append_new_line();
        out.append_new_line();
    }
}

fn write_alias(out: &mut CodeWriter, alias: &Located<Alias>) {
    out.append("alias ");
    out.append(alias.name().name());
    out.append(" as ");
    out.append(&alias.qualified_name().text());
    out.append_new_line();
}

fn write_declaration(out: &mut CodeWriter, declaration: &Declaration) {
    match declaration {
        Declaration::Connectivity(connectivity) => write_connectivity(out, connectivity),
    }
}

fn write_connectivity(out: &mut CodeWriter, declaration: &ConnectivityDeclaration) {
    let concept = declaration.concept();
    let multi_line = !concept.properties().is_empty()
        || matches!(
            declaration.connection(),
            OptConnectionDeclaration::Connection(connection)
                if !connection.properties().is_empty()
        );

    if let OptDocumentation::Documentation(text) = declaration.documentation() {
        out.append(text);
    }

    write_concept(out, concept);

    match declaration.connection() {
        OptConnectionDeclaration::NoConnection => {}
        OptConnectionDeclaration::Connection(connection) => {
            separate_connection(out, concept, multi_line);
            write_connection(out, connection);
            if multi_line && connection.properties().is_empty() {
                out.append_new_line();
            }
        }
        OptConnectionDeclaration::Disconnection(disconnection) => {
            separate_connection(out, concept, multi_line);
            write_disconnection(out, disconnection);
            if multi_line {
                out.append_new_line();
            }
        }
    }

    out.append(";");
}

/// The connection follows on the same line, or starts a new one when the
/// declaration spans several lines and the concept did not already end one.
fn separate_connection(out: &mut CodeWriter, concept: &ConceptDeclaration, multi_line: bool) {
    if !multi_line {
        out.append(" ");
    } else if concept.properties().is_empty() {
        out.append_new_line();
    }
}

fn write_concept(out: &mut CodeWriter, concept: &ConceptDeclaration) {
    write_concept_reference(out, concept.reference());
    write_properties(out, concept.properties());
}

fn write_concept_reference(out: &mut CodeWriter, reference: &ConceptReference) {
    write_label(out, reference.label());
    if let OptTypeRef::TypeRef(type_ref) = reference.type_ref() {
        write_type_ref(out, type_ref);
    }
}

fn write_label(out: &mut CodeWriter, label: &OptLabel) {
    match label {
        OptLabel::NoLabel => {}
        OptLabel::StringLabel(text) => {
            out.append("\"");
            out.append(text);
            out.append("\"");
        }
        OptLabel::UuidLabel(uuid) => out.append(&uuid.to_string()),
        OptLabel::Name(name) => out.append(&name.text()),
    }
}

/// `: Type` after a label, `:Type` on its own.
fn write_type_ref(out: &mut CodeWriter, type_ref: &TypeRef) {
    out.append(":");
    if type_ref.is_for_named_element() {
        out.append(" ");
    }
    out.append(&type_ref.type_name().text());
}

fn write_connection(out: &mut CodeWriter, connection: &ConnectionDeclaration) {
    out.append(&connection.type_ref().type_name().text());
    out.append(" ");
    write_concept_reference(out, connection.concept());
    write_valid_time(out, connection.valid_time());
    write_properties(out, connection.properties());
}

fn write_disconnection(out: &mut CodeWriter, disconnection: &DisconnectionDeclaration) {
    out.append("no-longer ");
    out.append(&disconnection.type_ref().type_name().text());
    out.append(" ");
    write_concept_reference(out, disconnection.concept());
    write_valid_time(out, disconnection.valid_time());
}

fn write_valid_time(out: &mut CodeWriter, valid_time: Option<&Instant>) {
    if let Some(instant) = valid_time {
        out.append(" valid-as-of ");
        write_instant(out, instant);
    }
}

fn write_properties(out: &mut CodeWriter, properties: &[Property]) {
    out.indented(|out| {
        let mut delimiter = " with";
        for property in properties {
            out.append(delimiter);
            out.append_new_line();
            write_property(out, property);
            delimiter = ",";
        }

        if !properties.is_empty() {
            out.append_new_line();
        }
    });
}

fn write_property(out: &mut CodeWriter, property: &Property) {
    out.append(property.name().name());
    out.append(" = ");
    out.append(property.value().text());

    if let Some(interval) = property.valid_time_interval() {
        write_valid_time_interval(out, interval);
    }

    if let Some(instant) = property.transaction_time() {
        out.append(" transacted-at ");
        write_instant(out, instant);
    }
}

fn write_valid_time_interval(out: &mut CodeWriter, interval: &TimeInterval) {
    if interval.ends_in_distant_future() {
        out.append(" valid-as-of ");
        write_instant(out, &interval.start());
    } else {
        out.append(" valid-during ");
        write_instant(out, &interval.start());
        out.append("..");
        write_instant(out, &interval.end());
    }
}

fn write_instant(out: &mut CodeWriter, instant: &Instant) {
    out.append("|");
    out.append(&format_instant(instant));
    out.append("|");
}
