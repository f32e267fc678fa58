//! Classification of host type descriptors for GraphQL schema generation.
//!
//! - [`flags`]: enum and optional flags
//! - [`outcome`]: does a return type carry an error/nil branch
//! - [`members`]: schema-visible members of a union
//! - [`naming`]: schema name of any type, containers peeled
//!
//! All four are pure over immutable [`Type`] trees.
pub mod types;
pub mod flags;
pub mod outcome;
pub mod members;
pub mod naming;
pub mod factory;
pub mod descriptor;
pub mod report;
pub mod error;

pub use error::{Error, Result};
pub use factory::{array_from_map, HostFactory, ValueFactory};
pub use flags::{is_enum, is_optional};
pub use members::member_types;
pub use naming::{scalar_type_name, type_name_from_type};
pub use outcome::is_returning_error_or_nil;
pub use report::{classify, Classification};
pub use types::{Field, ScalarKind, Type, UnionType};
