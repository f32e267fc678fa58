//! Classification summary of one descriptor, as the schema builder would see it.
use indexmap::IndexMap;
use serde::Serialize;

use crate::flags::{is_enum, is_optional};
use crate::members::member_types;
use crate::naming::type_name_from_type;
use crate::outcome::is_returning_error_or_nil;
use crate::types::Type;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub name: String,
    pub kind: &'static str,
    pub error_or_nil: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub union: Option<UnionReport>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, FieldReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnionReport {
    pub is_enum: bool,
    pub members: Vec<String>,    // flattened, schema names
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    #[serde(rename = "type")]
    pub type_name: String,
    pub optional: bool,
    pub error_or_nil: bool,
}

pub fn classify(ty: &Type) -> Classification {
    let union = ty.as_union().map(|union| UnionReport {
        is_enum: is_enum(union),
        members: member_types(ty).into_iter().map(type_name_from_type).collect(),
    });

    let fields: IndexMap<String, FieldReport> = ty
        .as_record()
        .map(|record| {
            record
                .fields
                .iter()
                .map(|field| {
                    let report = FieldReport {
                        type_name: type_name_from_type(&field.ty),
                        optional: is_optional(field),
                        error_or_nil: is_returning_error_or_nil(&field.ty),
                    };
                    (field.name.clone(), report)
                })
                .collect()
        })
        .unwrap_or_default();

    Classification {
        name: type_name_from_type(ty),
        kind: ty.kind_label(),
        error_or_nil: is_returning_error_or_nil(ty),
        union,
        fields,
    }
}

pub fn to_json_value(classification: &Classification) -> serde_json::Value {
    // only string keys and plain data in here
    serde_json::to_value(classification).unwrap_or(serde_json::Value::Null)
}
