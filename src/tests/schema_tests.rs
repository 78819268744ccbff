use std::{sync::Arc, thread};

use indexmap::IndexMap;
use pretty_assertions::assert_eq;

use crate::{
    ast::Type,
    resolve::resolve_type,
    schema::meta::{DeprecationStatus, EnumMeta, MetaType},
    validation::is_valid_input,
    value::Value,
};

use super::fixtures::{schema, trip};

#[test]
fn museum_trip_resolves_to_field_trip() {
    let schema = schema();
    let event = schema.concrete_type_by_name("Event").unwrap();
    let field_trip = schema.concrete_type_by_name("FieldTrip").unwrap();

    let resolved = resolve_type(event, &trip("MUSEUM"));

    assert!(Arc::ptr_eq(&resolved, field_trip));
    assert!(schema.is_possible_type(event, &resolved));
}

#[test]
fn union_resolves_like_interface() {
    let schema = schema();
    let outing = schema.concrete_type_by_name("Outing").unwrap();

    assert_eq!(resolve_type(outing, &trip("PARK")).name(), Some("FieldTrip"));
    assert_eq!(resolve_type(outing, &trip("ZOO")).name(), Some("Lecture"));
}

#[test]
fn concrete_types_resolve_to_themselves() {
    let schema = schema();
    let lecture = schema.concrete_type_by_name("Lecture").unwrap();

    assert!(Arc::ptr_eq(&resolve_type(lecture, &trip("MUSEUM")), lecture));
}

#[test]
fn field_lookup_is_exact() {
    let schema = schema();
    let field_trip = schema.concrete_type_by_name("FieldTrip").unwrap();

    let id = field_trip.field_by_name("id").unwrap();
    assert_eq!(id.field_type, Type::named("ID").non_null());
    assert!(field_trip.field_by_name("ID").is_none());
    assert!(field_trip.field_by_name("missing").is_none());
    assert!(field_trip.has_fields());

    let headcount = field_trip.field_by_name("headcount").unwrap();
    assert!(headcount.argument_by_name("includeStaff").is_some());
    assert!(headcount.argument_by_name("include_staff").is_none());
}

#[test]
fn descriptions_and_deprecations() {
    let schema = schema();
    let field_trip = schema.concrete_type_by_name("FieldTrip").unwrap();
    let kind = schema.concrete_type_by_name("TripKind").unwrap();

    assert_eq!(
        field_trip.description().map(|d| d.as_str()),
        Some("An outing away from school"),
    );
    assert_eq!(kind.description(), None);
    let trips = schema
        .make_type(&Type::list(Type::named("FieldTrip")))
        .unwrap();
    assert_eq!(trips.description(), None);

    let MetaType::Enum(EnumMeta { values, .. }) = &**kind else {
        panic!("`TripKind` is not an enum: {kind}");
    };
    assert_eq!(
        values["ZOO"].deprecation_status,
        DeprecationStatus::Deprecated(Some("Closed for renovation".into())),
    );
    assert_eq!(values["PARK"].deprecation_status.reason(), None);
}

#[test]
fn field_resolve_capability() {
    let schema = schema();
    let field_trip = schema.concrete_type_by_name("FieldTrip").unwrap();
    let stops = field_trip.field_by_name("stops").unwrap();

    let resolve = stops.resolve_fn().unwrap();
    let value = resolve(&trip("PARK"), &IndexMap::new()).unwrap();

    assert_eq!(value, Value::from(vec!["gate", "hall"]));
    assert!(field_trip.field_by_name("id").unwrap().resolve_fn().is_none());
}

#[test]
fn input_object_fields() {
    let schema = schema();
    let filter = schema.concrete_type_by_name("TripFilter").unwrap();

    let min = filter.input_field_by_name("minHeadcount").unwrap();
    assert_eq!(min.default_value, Some(Value::scalar(0)));
    assert!(filter.input_field_by_name("maxHeadcount").is_none());
    assert!(filter.fields().is_none());
    assert!(filter.has_fields());
}

#[test]
fn argument_types_validate_through_schema() {
    let schema = schema();
    let query = schema.concrete_type_by_name("Query").unwrap();
    let outing = query.field_by_name("outing").unwrap();
    let id_arg = outing.argument_by_name("id").unwrap();

    let id = schema.make_type(&id_arg.arg_type).unwrap();

    assert!(is_valid_input(&id, &Value::scalar("t-1")));
    assert!(!is_valid_input(&id, &Value::null()));
}

#[test]
fn enum_values_through_schema() {
    let schema = schema();
    let kind = schema
        .make_type(&Type::list(Type::named("TripKind").non_null()))
        .unwrap();

    assert!(kind.is_valid_input(&Value::list(vec![
        Value::enum_value("MUSEUM"),
        Value::enum_value("ZOO"),
    ])));
    assert!(!kind.is_valid_input(&Value::list(vec![Value::enum_value("AQUARIUM")])));
    assert_eq!(
        kind.named_type().serialize_value(&Value::enum_value("PARK")),
        Some(Ok(Value::enum_value("PARK"))),
    );
}

#[test]
fn events_field_is_non_null_list() {
    let schema = schema();
    let query = schema.concrete_type_by_name("Query").unwrap();

    let events = schema
        .field_type(query.field_by_name("events").unwrap())
        .unwrap();

    assert_eq!(events.to_string(), "[Event!]!");
    assert!(!events.is_nullable_type());
    assert!(events.nullable().is_nullable_type());
    assert!(events.is_output_type());
    assert!(!events.is_input_type());
    assert!(events.named_type().is_abstract_type());
}

#[test]
fn shared_across_threads() {
    let schema = Arc::new(schema());

    let handles = ["MUSEUM", "PARK", "ZOO", "CONCERT"]
        .into_iter()
        .map(|kind| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let event = schema.concrete_type_by_name("Event").unwrap();
                let int = schema.concrete_type_by_name("Int").unwrap();
                let resolved = resolve_type(event, &trip(kind));
                (
                    resolved.name().map(str::to_owned),
                    int.is_valid_input(&Value::scalar(-1)),
                    event.is_abstract_type(),
                )
            })
        })
        .collect::<Vec<_>>();

    let results = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect::<Vec<_>>();

    assert_eq!(
        results,
        [
            (Some("FieldTrip".to_owned()), false, true),
            (Some("FieldTrip".to_owned()), false, true),
            (Some("Lecture".to_owned()), false, true),
            (Some("Lecture".to_owned()), false, true),
        ],
    );
}
