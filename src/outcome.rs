//! Error/nil detection on resolver return types.
use crate::types::Type;

/// True when `ty` is `error`, or a union with an error or nil branch.
///
/// Only direct members are inspected: `T|error` and `T?` are the conventions
/// that matter here. Error/nil nested deeper is dropped by
/// [`crate::members::member_types`] instead.
pub fn is_returning_error_or_nil(ty: &Type) -> bool {
    match ty {
        Type::Error(_) => true,
        Type::Union(union) => union.members.iter().any(Type::is_error_or_nil),
        _ => false,
    }
}
