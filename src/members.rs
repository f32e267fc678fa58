//! Union flattening: the member list a schema union is built from.
use crate::flags::is_enum;
use crate::types::{Type, UnionType};

/// Flatten a union into its schema-visible members.
///
/// - enums are leaves: an enum union yields itself, at any depth
/// - nested unions are spliced in place
/// - error and nil branches are dropped
/// - order is declaration order; repeats are kept
///
/// Panics if `ty` is not a union.
pub fn member_types(ty: &Type) -> Vec<&Type> {
    let Some(union) = ty.as_union() else {
        panic!("member_types: `{}` ({}) is not a union", ty.name(), ty.kind_label());
    };
    if is_enum(union) {
        return vec![ty];
    }
    let mut out = Vec::with_capacity(union.members.len());
    splice_members(union, &mut out);
    tracing::trace!(union = %union.name, members = out.len(), "flattened union");
    out
}

fn splice_members<'a>(union: &'a UnionType, out: &mut Vec<&'a Type>) {
    for member in &union.members {
        match member {
            Type::Error(_) | Type::Null => continue,
            Type::Union(inner) if !is_enum(inner) => splice_members(inner, out),
            _ => out.push(member),
        }
    }
}
