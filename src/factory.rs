//! Host value creation.
//!
//! The resolver side sometimes needs an empty list shaped like a record it
//! already holds (a record becomes `Record[]`). Creating types and values is
//! the host's job, so it goes through [`ValueFactory`].
use indexmap::IndexMap;

use crate::types::{ArrayType, Type};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Decimal(String),     // kept textual, exactness is the host's concern
    Boolean(bool),
    String(String),
    Null,
    Array(ArrayValue),
    Map(MapValue),
}

/// A map-like host value (records are maps) and its runtime type.
#[derive(Debug, Clone, PartialEq)]
pub struct MapValue {
    pub ty: Type,
    pub entries: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayValue {
    pub ty: ArrayType,
    pub elements: Vec<Value>,
}

impl MapValue {
    pub fn new(ty: Type) -> Self {
        Self { ty, entries: IndexMap::new() }
    }

    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.entries.insert(key.into(), value);
        self
    }
}

impl ArrayValue {
    pub fn element_type(&self) -> &Type {
        &self.ty.element
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

pub trait ValueFactory {
    fn create_array_type(&self, element: Type) -> ArrayType;
    fn create_array_value(&self, ty: ArrayType) -> ArrayValue;
}

/// In-process factory: plain owned descriptors, no registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFactory;

impl ValueFactory for HostFactory {
    fn create_array_type(&self, element: Type) -> ArrayType {
        ArrayType::new(element)
    }

    fn create_array_value(&self, ty: ArrayType) -> ArrayValue {
        ArrayValue { ty, elements: Vec::new() }
    }
}

/// New empty array whose element type is `record`'s type.
/// `record` itself is neither consumed nor inserted.
pub fn array_from_map<F>(record: &MapValue, factory: &F) -> ArrayValue
where
    F: ValueFactory + ?Sized,
{
    let array_type = factory.create_array_type(record.ty.clone());
    factory.create_array_value(array_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::type_name_from_type;
    use crate::types::Field;
    use std::cell::Cell;

    fn person() -> Type {
        Type::record("Person", vec![
            Field::required("name", Type::STRING),
            Field::optional("age", Type::INT),
        ])
    }

    #[test]
    fn array_is_empty_and_typed_by_the_record() {
        let value = MapValue::new(person())
            .with("name", Value::String("Ann".into()))
            .with("age", Value::Int(40));
        let out = array_from_map(&value, &HostFactory);
        assert!(out.is_empty());
        assert_eq!(out.element_type(), &person());
        assert_eq!(out.ty.name, "Person[]");
        assert_eq!(type_name_from_type(&Type::Array(out.ty.clone())), "Person");
        // source untouched
        assert_eq!(value.entries.len(), 2);
    }

    #[test]
    fn creation_is_delegated_to_the_factory() {
        #[derive(Default)]
        struct Counting {
            types: Cell<u32>,
            values: Cell<u32>,
        }
        impl ValueFactory for Counting {
            fn create_array_type(&self, element: Type) -> ArrayType {
                self.types.set(self.types.get() + 1);
                ArrayType { name: "rows".into(), element: Box::new(element) }
            }
            fn create_array_value(&self, ty: ArrayType) -> ArrayValue {
                self.values.set(self.values.get() + 1);
                ArrayValue { ty, elements: Vec::new() }
            }
        }

        let factory = Counting::default();
        let dyn_factory: &dyn ValueFactory = &factory;
        let out = array_from_map(&MapValue::new(Type::map(Type::STRING)), dyn_factory);
        assert_eq!(out.ty.name, "rows");
        assert_eq!(factory.types.get(), 1);
        assert_eq!(factory.values.get(), 1);
    }
}
