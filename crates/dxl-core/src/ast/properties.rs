//! Properties and their value expressions.

use crate::{
    ast::SimpleName,
    origin::{HasOrigin, Located, Origin},
    time::{Instant, TimeInterval},
};

/// A property value.
///
/// Literals keep their raw source text, which is already their canonical
/// rendering; no decoding happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// The `absent` keyword.
    Absent,
    Boolean(String),
    Character(String),
    /// Bounded literal text including the `|` delimiters.
    Date(String),
    DateTime(String),
    FloatingPoint(String),
    Integer(String),
    String(String),
    Time(String),
    Url(String),
    Uuid(String),
}

impl Expression {
    /// The source text of the expression.
    pub fn text(&self) -> &str {
        match self {
            Expression::Absent => "absent",
            Expression::Boolean(text)
            | Expression::Character(text)
            | Expression::Date(text)
            | Expression::DateTime(text)
            | Expression::FloatingPoint(text)
            | Expression::Integer(text)
            | Expression::String(text)
            | Expression::Time(text)
            | Expression::Url(text)
            | Expression::Uuid(text) => text,
        }
    }
}

/// `name = value`, optionally qualified by valid time and transaction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: SimpleName,
    value: Located<Expression>,
    valid_time_interval: Option<TimeInterval>,
    transaction_time: Option<Instant>,
}

impl Property {
    pub fn new(
        name: SimpleName,
        value: Located<Expression>,
        valid_time_interval: Option<TimeInterval>,
        transaction_time: Option<Instant>,
    ) -> Self {
        Self {
            name,
            value,
            valid_time_interval,
            transaction_time,
        }
    }

    pub fn name(&self) -> &SimpleName {
        &self.name
    }

    pub fn value(&self) -> &Located<Expression> {
        &self.value
    }

    pub fn valid_time_interval(&self) -> Option<&TimeInterval> {
        self.valid_time_interval.as_ref()
    }

    pub fn transaction_time(&self) -> Option<&Instant> {
        self.transaction_time.as_ref()
    }
}

impl HasOrigin for Property {
    fn origin(&self) -> &Origin {
        self.name.origin()
    }
}
