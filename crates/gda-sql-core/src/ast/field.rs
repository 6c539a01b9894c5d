//! Field and field item types.

use super::statement::SelectStatement;

/// Arithmetic operators usable inside a field equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOp {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Div,
}

impl FieldOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Times => "*",
            Self::Div => "/",
        }
    }

    /// Returns the precedence of the operator (higher = binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Times | Self::Div => 2,
        }
    }
}

/// The value part of a [`Field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldItem {
    /// A dotted identifier path such as `table.column`.
    ///
    /// Literal constants (`42`, `'text'`, `NULL`) are stored here as a
    /// single segment holding their source text.
    Name(Vec<String>),
    /// An arithmetic expression over two items.
    Equation {
        /// Left operand.
        left: Box<FieldItem>,
        /// Right operand.
        right: Box<FieldItem>,
        /// Operator.
        op: FieldOp,
    },
    /// A sub-select used as a value.
    InlineSelect(Box<SelectStatement>),
    /// A function call. An empty name renders as a bare parenthesised
    /// list, which is how `IN (a, b)` value lists are kept.
    Function {
        /// Function name.
        name: String,
        /// Arguments, in call order.
        args: Vec<Field>,
    },
}

impl FieldItem {
    /// Returns the dotted path when this item is a `Name`.
    #[must_use]
    pub fn as_name(&self) -> Option<&[String]> {
        match self {
            Self::Name(path) => Some(path),
            _ => None,
        }
    }
}

/// Kind of metadata carried by a [`ParamSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSpecKind {
    /// Parameter name.
    Name,
    /// Human readable description.
    Descr,
    /// Declared data type.
    Type,
    /// Whether the field is an external parameter.
    IsParam,
    /// Whether NULL is an acceptable value.
    NullOk,
}

impl ParamSpecKind {
    /// Returns the attribute name used in the bracket syntax.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Descr => "descr",
            Self::Type => "type",
            Self::IsParam => "isparam",
            Self::NullOk => "nullok",
        }
    }

    /// Looks up a kind from its attribute name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "descr" => Some(Self::Descr),
            "type" => Some(Self::Type),
            "isparam" => Some(Self::IsParam),
            "nullok" => Some(Self::NullOk),
            _ => None,
        }
    }
}

/// Declared external parameter metadata attached to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    /// What this entry describes.
    pub kind: ParamSpecKind,
    /// The attribute value.
    pub content: String,
}

/// A value position in a statement: select list entry, function argument,
/// condition operand, insert column or value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The value itself.
    pub item: FieldItem,
    /// `AS` alias.
    pub alias: Option<String>,
    /// Parameter metadata, in declaration order.
    pub param_spec: Vec<ParamSpec>,
}

impl Field {
    /// Returns the first param spec entry of the given kind.
    #[must_use]
    pub fn param(&self, kind: ParamSpecKind) -> Option<&str> {
        self.param_spec
            .iter()
            .find(|p| p.kind == kind)
            .map(|p| p.content.as_str())
    }

    /// A field with an empty name and nothing attached.
    ///
    /// Used as a stand-in while a subtree is moved out of its slot; it
    /// owns no heap memory.
    #[must_use]
    pub(crate) const fn vacant() -> Self {
        Self {
            item: FieldItem::Name(Vec::new()),
            alias: None,
            param_spec: Vec::new(),
        }
    }
}
