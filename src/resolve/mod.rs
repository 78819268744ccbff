//! Resolution of abstract types into concrete ones.

use std::sync::Arc;

use crate::{schema::meta::MetaType, value::Value};

/// Picks the type representing a runtime `value` of `meta_type`.
///
/// If `meta_type` has a resolve-type capability (interfaces and unions may
/// have one), its result is returned. Otherwise `meta_type` itself is
/// returned, which covers concrete types being passed in directly.
///
/// The value's shape is never inspected here; the capability is the only
/// source of the answer.
pub fn resolve_type<S>(meta_type: &Arc<MetaType<S>>, value: &Value<S>) -> Arc<MetaType<S>> {
    let Some(resolve) = meta_type.resolve_type_fn() else {
        crate::__kinds_trace!(meta_type = %meta_type, "no resolve-type capability, keeping type");
        return Arc::clone(meta_type);
    };

    let concrete = resolve(value);
    crate::__kinds_trace!(
        abstract_type = %meta_type,
        concrete_type = %concrete,
        "resolved abstract type"
    );
    concrete
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use indexmap::IndexMap;

    use crate::{
        ast::Type,
        schema::meta::{Field, InterfaceMeta, MetaType, ObjectMeta, ScalarMeta, UnionMeta},
        value::Value,
    };

    use super::resolve_type;

    fn trip(kind: &str) -> Value {
        Value::object(IndexMap::from([("kind", Value::scalar(kind))]))
    }

    #[test]
    fn falls_back_to_identity() {
        let event: Arc<MetaType> = Arc::new(
            InterfaceMeta::new("Event", [Field::new("id", Type::named("ID").non_null())]).into_meta(),
        );

        let resolved = resolve_type(&event, &trip("museum"));

        assert!(Arc::ptr_eq(&resolved, &event));
    }

    #[test]
    fn concrete_types_resolve_to_themselves() {
        let date: Arc<MetaType> = Arc::new(ScalarMeta::new("Date").into_meta());

        assert!(Arc::ptr_eq(&resolve_type(&date, &Value::scalar("2024-01-01")), &date));
    }

    #[test]
    fn dispatches_to_resolver() {
        let field_trip: Arc<MetaType> = Arc::new(
            ObjectMeta::new("FieldTrip", [Field::new("id", Type::named("ID").non_null())])
                .interfaces(&[Type::named("Event")])
                .into_meta(),
        );
        let lecture: Arc<MetaType> = Arc::new(
            ObjectMeta::new("Lecture", [Field::new("id", Type::named("ID").non_null())])
                .interfaces(&[Type::named("Event")])
                .into_meta(),
        );
        let event: Arc<MetaType> = Arc::new(
            InterfaceMeta::new("Event", [Field::new("id", Type::named("ID").non_null())])
                .resolve_type_with({
                    let field_trip = Arc::clone(&field_trip);
                    let lecture = Arc::clone(&lecture);
                    move |v: &Value| {
                        if v.get_field_value("kind").and_then(Value::as_string_value)
                            == Some("museum")
                        {
                            Arc::clone(&field_trip)
                        } else {
                            Arc::clone(&lecture)
                        }
                    }
                })
                .into_meta(),
        );

        assert!(Arc::ptr_eq(&resolve_type(&event, &trip("museum")), &field_trip));
        assert!(Arc::ptr_eq(&resolve_type(&event, &trip("hall")), &lecture));
        assert_eq!(resolve_type(&event, &Value::Null).name(), Some("Lecture"));
    }

    #[test]
    fn union_resolver() {
        let museum: Arc<MetaType> = Arc::new(ObjectMeta::new("Museum", [Field::new("name", Type::named("String"))]).into_meta());
        let stop: Arc<MetaType> = Arc::new(
            UnionMeta::new("Stop", &[Type::named("Museum")])
                .resolve_type_with({
                    let museum = Arc::clone(&museum);
                    move |_: &Value| Arc::clone(&museum)
                })
                .into_meta(),
        );

        assert_eq!(resolve_type(&stop, &Value::Null).name(), Some("Museum"));
    }
}
