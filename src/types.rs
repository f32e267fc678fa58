//! Host type descriptors, as seen by the schema generator.
//!
//! One recursive enum, matched exhaustively. Descriptors are built by the host
//! (or loaded from JSON, see [`crate::descriptor`]) and never mutated here.
use serde::{Deserialize, Serialize};

/// Name the host gives the nil type.
pub const NULL_TYPE_NAME: &str = "()";
/// Name the host gives the built-in error type.
pub const ERROR_TYPE_NAME: &str = "error";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "crate::descriptor::TypeRepr", into = "crate::descriptor::TypeRepr")]
pub enum Type {
    Scalar(ScalarKind),
    Array(ArrayType),
    Map(MapType),
    Table(TableType),
    Union(UnionType),
    Error(ErrorType),
    Null,
    Record(RecordType),
    /// Objects, services, and any other nominal host type.
    Named(NamedType),
}

/// Closed set of host scalars. `Byte` has no schema counterpart of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    Int,
    Byte,
    Float,
    Decimal,
    Boolean,
    String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub name: String,
    pub element: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapType {
    pub name: String,
    pub constraint: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableType {
    pub name: String,
    pub constraint: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    /// Fully qualified, e.g. `org/pkg.mod:Color`.
    pub name: String,
    pub members: Vec<Type>,      // declaration order
    pub is_enum: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorType {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordType {
    pub name: String,
    pub fields: Vec<Field>,      // declaration order
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedType {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub optional: bool,          // `field?: T` in the host
}

// ————————————————————————————————————————————————————————————————————————————
// CONSTRUCTORS
// ————————————————————————————————————————————————————————————————————————————

impl Type {
    pub const INT: Type = Type::Scalar(ScalarKind::Int);
    pub const BYTE: Type = Type::Scalar(ScalarKind::Byte);
    pub const FLOAT: Type = Type::Scalar(ScalarKind::Float);
    pub const DECIMAL: Type = Type::Scalar(ScalarKind::Decimal);
    pub const BOOLEAN: Type = Type::Scalar(ScalarKind::Boolean);
    pub const STRING: Type = Type::Scalar(ScalarKind::String);

    pub fn array(element: Type) -> Self {
        Type::Array(ArrayType::new(element))
    }

    pub fn map(constraint: Type) -> Self {
        let name = format!("map<{}>", constraint.name());
        Type::Map(MapType { name, constraint: Box::new(constraint) })
    }

    pub fn table(constraint: Type) -> Self {
        let name = format!("table<{}>", constraint.name());
        Type::Table(TableType { name, constraint: Box::new(constraint) })
    }

    pub fn union(name: impl Into<String>, members: Vec<Type>) -> Self {
        Type::Union(UnionType { name: name.into(), members, is_enum: false })
    }

    /// An enum is a union of string constants flagged as such by the host.
    pub fn enumeration(name: impl Into<String>, members: Vec<Type>) -> Self {
        Type::Union(UnionType { name: name.into(), members, is_enum: true })
    }

    pub fn error() -> Self {
        Type::Error(ErrorType { name: ERROR_TYPE_NAME.to_string() })
    }

    pub fn record(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Type::Record(RecordType { name: name.into(), fields })
    }

    pub fn named(name: impl Into<String>) -> Self {
        Type::Named(NamedType { name: name.into() })
    }
}

impl ArrayType {
    pub fn new(element: Type) -> Self {
        let name = format!("{}[]", element.name());
        Self { name, element: Box::new(element) }
    }
}

impl Field {
    pub fn required(name: impl Into<String>, ty: Type) -> Self {
        Self { name: name.into(), ty, optional: false }
    }

    pub fn optional(name: impl Into<String>, ty: Type) -> Self {
        Self { name: name.into(), ty, optional: true }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// ACCESSORS
// ————————————————————————————————————————————————————————————————————————————

impl Type {
    /// The host's own name for this type (not the schema name).
    pub fn name(&self) -> &str {
        match self {
            Type::Scalar(kind) => kind.host_name(),
            Type::Array(array) => &array.name,
            Type::Map(map) => &map.name,
            Type::Table(table) => &table.name,
            Type::Union(union) => &union.name,
            Type::Error(error) => &error.name,
            Type::Null => NULL_TYPE_NAME,
            Type::Record(record) => &record.name,
            Type::Named(named) => &named.name,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            Type::Scalar(_) => "scalar",
            Type::Array(_) => "array",
            Type::Map(_) => "map",
            Type::Table(_) => "table",
            Type::Union(union) if union.is_enum => "enum",
            Type::Union(_) => "union",
            Type::Error(_) => "error",
            Type::Null => "null",
            Type::Record(_) => "record",
            Type::Named(_) => "named",
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            Type::Union(union) => Some(union),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordType> {
        match self {
            Type::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Error or nil: the two branches a schema success type never carries.
    pub fn is_error_or_nil(&self) -> bool {
        matches!(self, Type::Error(_) | Type::Null)
    }
}

impl ScalarKind {
    pub fn host_name(self) -> &'static str {
        match self {
            ScalarKind::Int => "int",
            ScalarKind::Byte => "byte",
            ScalarKind::Float => "float",
            ScalarKind::Decimal => "decimal",
            ScalarKind::Boolean => "boolean",
            ScalarKind::String => "string",
        }
    }
}
