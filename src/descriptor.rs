//! JSON form of host type descriptors.
//!
//! ```json
//! { "kind": "union", "name": "m:Search", "members": [
//!     { "kind": "record", "name": "Person", "fields": [
//!         { "name": "age", "type": { "kind": "int" }, "optional": true } ] },
//!     { "kind": "null" } ] }
//! ```
//!
//! Container names may be omitted and are then derived from the contents
//! (`int[]`, `map<string>`, `table<Row>`).
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::*;

/// Wire shape of a [`Type`]; `Type` (de)serializes through it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRepr {
    Int,
    Byte,
    Float,
    Decimal,
    Boolean,
    String,
    Array {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        element: Box<Type>,
    },
    Map {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        constraint: Box<Type>,
    },
    Table {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        constraint: Box<Type>,
    },
    Union {
        name: String,
        members: Vec<Type>,
        #[serde(default)]
        is_enum: bool,
    },
    Error {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Null,
    Record {
        name: String,
        #[serde(default)]
        fields: Vec<Field>,
    },
    Named {
        name: String,
    },
}

impl From<TypeRepr> for Type {
    fn from(repr: TypeRepr) -> Self {
        match repr {
            TypeRepr::Int => Type::INT,
            TypeRepr::Byte => Type::BYTE,
            TypeRepr::Float => Type::FLOAT,
            TypeRepr::Decimal => Type::DECIMAL,
            TypeRepr::Boolean => Type::BOOLEAN,
            TypeRepr::String => Type::STRING,
            TypeRepr::Array { name, element } => {
                let mut array = ArrayType::new(*element);
                if let Some(name) = name { array.name = name; }
                Type::Array(array)
            }
            TypeRepr::Map { name, constraint } => {
                let name = name.unwrap_or_else(|| format!("map<{}>", constraint.name()));
                Type::Map(MapType { name, constraint })
            }
            TypeRepr::Table { name, constraint } => {
                let name = name.unwrap_or_else(|| format!("table<{}>", constraint.name()));
                Type::Table(TableType { name, constraint })
            }
            TypeRepr::Union { name, members, is_enum } => {
                Type::Union(UnionType { name, members, is_enum })
            }
            TypeRepr::Error { name } => Type::Error(ErrorType {
                name: name.unwrap_or_else(|| ERROR_TYPE_NAME.to_string()),
            }),
            TypeRepr::Null => Type::Null,
            TypeRepr::Record { name, fields } => Type::Record(RecordType { name, fields }),
            TypeRepr::Named { name } => Type::Named(NamedType { name }),
        }
    }
}

impl From<Type> for TypeRepr {
    fn from(ty: Type) -> Self {
        match ty {
            Type::Scalar(ScalarKind::Int) => TypeRepr::Int,
            Type::Scalar(ScalarKind::Byte) => TypeRepr::Byte,
            Type::Scalar(ScalarKind::Float) => TypeRepr::Float,
            Type::Scalar(ScalarKind::Decimal) => TypeRepr::Decimal,
            Type::Scalar(ScalarKind::Boolean) => TypeRepr::Boolean,
            Type::Scalar(ScalarKind::String) => TypeRepr::String,
            Type::Array(ArrayType { name, element }) => TypeRepr::Array { name: Some(name), element },
            Type::Map(MapType { name, constraint }) => TypeRepr::Map { name: Some(name), constraint },
            Type::Table(TableType { name, constraint }) => TypeRepr::Table { name: Some(name), constraint },
            Type::Union(UnionType { name, members, is_enum }) => TypeRepr::Union { name, members, is_enum },
            Type::Error(ErrorType { name }) => TypeRepr::Error { name: Some(name) },
            Type::Null => TypeRepr::Null,
            Type::Record(RecordType { name, fields }) => TypeRepr::Record { name, fields },
            Type::Named(NamedType { name }) => TypeRepr::Named { name },
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// LOADING
// ————————————————————————————————————————————————————————————————————————————

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(path_error)
}

pub fn from_slice_with_path<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize::<_, T>(de).map_err(path_error)
}

fn path_error(err: serde_path_to_error::Error<serde_json::Error>) -> Error {
    Error::Parse {
        file: None,
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    }
}

pub fn from_str(src: &str) -> Result<Type> {
    from_str_with_path(src)
}

pub fn load_file(path: &Path) -> Result<Type> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let ty = from_slice_with_path::<Type>(&bytes).map_err(|err| match err {
        Error::Parse { path: json_path, message, .. } => Error::Parse {
            file: Some(path.to_path_buf()),
            path: json_path,
            message,
        },
        other => other,
    })?;
    tracing::debug!(file = %path.display(), name = %ty.name(), "loaded descriptor");
    Ok(ty)
}

/// Expand literal paths and glob patterns into concrete files.
pub fn resolve_inputs<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let before = out.len();
            for entry in glob::glob(pattern)? {
                out.push(entry?);
            }
            if out.len() == before {
                return Err(Error::NoMatch(pattern.to_string()));
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(v: serde_json::Value) -> Type {
        from_str(&v.to_string()).unwrap()
    }

    #[test]
    fn scalars_and_containers() {
        assert_eq!(parse(json!({"kind": "int"})), Type::INT);
        assert_eq!(parse(json!({"kind": "byte"})), Type::BYTE);
        let ty = parse(json!({"kind": "array", "element": {"kind": "map", "constraint": {"kind": "string"}}}));
        assert_eq!(ty, Type::array(Type::map(Type::STRING)));
        assert_eq!(ty.name(), "map<string>[]");
    }

    #[test]
    fn explicit_container_name_wins() {
        let ty = parse(json!({"kind": "table", "name": "PeopleTable", "constraint": {"kind": "named", "name": "Person"}}));
        assert_eq!(ty.name(), "PeopleTable");
    }

    #[test]
    fn unions_records_and_flags() {
        let ty = parse(json!({
            "kind": "union",
            "name": "m:Result",
            "members": [
                {"kind": "record", "name": "Person", "fields": [
                    {"name": "name", "type": {"kind": "string"}},
                    {"name": "age", "type": {"kind": "int"}, "optional": true}
                ]},
                {"kind": "union", "name": "m:Color", "is_enum": true, "members": [{"kind": "string"}]},
                {"kind": "error"},
                {"kind": "null"}
            ]
        }));
        let union = ty.as_union().unwrap();
        assert!(!union.is_enum);
        assert_eq!(union.members.len(), 4);
        let person = union.members[0].as_record().unwrap();
        assert!(!person.fields[0].optional);
        assert!(person.fields[1].optional);
        assert!(union.members[1].as_union().unwrap().is_enum);
        assert_eq!(union.members[2], Type::error());
        assert_eq!(union.members[3], Type::Null);
    }

    #[test]
    fn serialization_keeps_derived_names() {
        let ty = Type::array(Type::FLOAT);
        let v = serde_json::to_value(&ty).unwrap();
        assert_eq!(v, json!({"kind": "array", "name": "float[]", "element": {"kind": "float"}}));
        assert_eq!(serde_json::from_value::<Type>(v).unwrap(), ty);
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let src = json!({"kind": "union", "name": "U", "members": [{"kind": "int"}, {"kind": "tuple"}]}).to_string();
        let err = from_str(&src).unwrap_err();
        match &err {
            Error::Parse { file, message, .. } => {
                assert!(file.is_none());
                assert!(message.contains("tuple"), "message was {message}");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("at JSON path"));
    }

    #[test]
    fn field_errors_carry_json_path() {
        // `Field` is a plain struct, so the path reaches into it
        let src = json!({"name": "age", "type": {"kind": "int"}, "optional": "yes"}).to_string();
        let err = from_str_with_path::<Field>(&src).unwrap_err();
        match err {
            Error::Parse { path, .. } => assert_eq!(path, "optional"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn literal_inputs_pass_through() {
        let paths = resolve_inputs(["a.json", "dir/b.json"]).unwrap();
        assert_eq!(paths, [PathBuf::from("a.json"), PathBuf::from("dir/b.json")]);
    }

    #[test]
    fn empty_glob_is_an_error() {
        let err = resolve_inputs(["/nonexistent-gql-typemap-dir/*.json"]).unwrap_err();
        assert!(matches!(err, Error::NoMatch(_)));
    }
}
