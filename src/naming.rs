//! Schema names for host types.
use crate::types::{ScalarKind, Type};

pub const INTEGER: &str = "Int";
pub const FLOAT: &str = "Float";
pub const DECIMAL: &str = "Decimal";
pub const BOOLEAN: &str = "Boolean";
pub const STRING: &str = "String";

/// Separates the module path from the local name in a qualified type name.
pub const MODULE_SEPARATOR: char = ':';

pub fn scalar_type_name(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::Int => INTEGER,
        ScalarKind::Float => FLOAT,
        ScalarKind::Decimal => DECIMAL,
        ScalarKind::Boolean => BOOLEAN,
        ScalarKind::Byte | ScalarKind::String => STRING,
    }
}

/// Resolve the schema name of `ty`.
///
/// Containers are peeled down to their leaf: `map<table<int[]>>` names as
/// `Int`. List/nullability wrapping is the schema builder's business.
pub fn type_name_from_type(ty: &Type) -> String {
    match ty {
        Type::Scalar(kind) => scalar_type_name(*kind).to_string(),
        Type::Union(union) => local_name(&union.name).to_string(),
        Type::Array(array) => type_name_from_type(&array.element),
        Type::Map(map) => type_name_from_type(&map.constraint),
        Type::Table(table) => type_name_from_type(&table.constraint),
        Type::Error(_) | Type::Null | Type::Record(_) | Type::Named(_) => ty.name().to_string(),
    }
}

/// `org/pkg.mod:Color` → `Color`. Trailing separators are ignored.
pub fn local_name(qualified: &str) -> &str {
    let trimmed = qualified.trim_end_matches(MODULE_SEPARATOR);
    match trimmed.rsplit_once(MODULE_SEPARATOR) {
        Some((_, local)) => local,
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;

    #[test]
    fn scalar_table() {
        assert_eq!(scalar_type_name(ScalarKind::Int), "Int");
        assert_eq!(scalar_type_name(ScalarKind::Float), "Float");
        assert_eq!(scalar_type_name(ScalarKind::Decimal), "Decimal");
        assert_eq!(scalar_type_name(ScalarKind::Boolean), "Boolean");
        assert_eq!(scalar_type_name(ScalarKind::String), "String");
        assert_eq!(scalar_type_name(ScalarKind::Byte), "String");
    }

    #[test]
    fn containers_resolve_to_their_leaf() {
        assert_eq!(type_name_from_type(&Type::INT), "Int");
        assert_eq!(type_name_from_type(&Type::array(Type::INT)), "Int");
        assert_eq!(type_name_from_type(&Type::map(Type::STRING)), "String");
        let deep = Type::array(Type::map(Type::table(Type::DECIMAL)));
        assert_eq!(type_name_from_type(&deep), "Decimal");
        let rows = Type::table(Type::record("Person", vec![Field::required("id", Type::INT)]));
        assert_eq!(type_name_from_type(&rows), "Person");
    }

    #[test]
    fn unions_use_their_local_name() {
        let color = Type::enumeration("pkg.mod:Color", vec![Type::STRING]);
        assert_eq!(type_name_from_type(&color), "Color");
        let search = Type::union("ballerina/graphql.test:0.1.0:Search", vec![Type::named("P")]);
        assert_eq!(type_name_from_type(&search), "Search");
        let bare = Type::union("Search", vec![]);
        assert_eq!(type_name_from_type(&bare), "Search");
        let list = Type::array(Type::enumeration("m:Color", vec![Type::STRING]));
        assert_eq!(type_name_from_type(&list), "Color");
    }

    #[test]
    fn other_types_keep_their_declared_name() {
        assert_eq!(type_name_from_type(&Type::named("m:Service")), "m:Service");
        assert_eq!(type_name_from_type(&Type::error()), "error");
        assert_eq!(type_name_from_type(&Type::Null), "()");
    }

    #[test]
    fn local_name_edges() {
        assert_eq!(local_name("a:b:"), "b");
        assert_eq!(local_name(""), "");
        assert_eq!(local_name(":"), "");
        assert_eq!(local_name("Color"), "Color");
    }
}
