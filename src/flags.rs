//! Capability flags carried by descriptors.
use crate::types::{Field, UnionType};

pub fn is_enum(union: &UnionType) -> bool {
    union.is_enum
}

pub fn is_optional(field: &Field) -> bool {
    field.optional
}
