use crate::{
    schema::meta::{ListMeta, MetaType},
    value::{ScalarValue, Value},
};

/// Checks whether a raw `value` can be used where `meta_type` is expected.
///
/// - A non-null type rejects `null` and otherwise checks its inner type.
/// - Any other type accepts `null`.
/// - A list type checks every element of a list value against its item
///   type. A single non-list value is checked as a one-element list would
///   be, as GraphQL input coercion allows.
/// - A type with a parse capability (scalars that have one, enums) accepts
///   exactly the values the capability parses. A parse failure makes the
///   value invalid and is never propagated.
/// - Anything else is accepted. Fields of input object values are not
///   inspected here.
///
/// Never panics, whatever the shape of `value`.
pub fn is_valid_input<S: ScalarValue>(meta_type: &MetaType<S>, value: &Value<S>) -> bool {
    match meta_type {
        MetaType::NonNull(meta) => !value.is_null() && is_valid_input(meta.of_type(), value),
        _ if value.is_null() => true,
        MetaType::List(ListMeta { of_type }) => match value.as_list_value() {
            Some(items) => items.iter().all(|item| is_valid_input(of_type, item)),
            None => is_valid_input(of_type, value),
        },
        leaf => match leaf.parse_value(value) {
            Some(Ok(_)) | None => true,
            Some(Err(_err)) => {
                crate::__kinds_trace_debug!(
                    meta_type = %leaf,
                    %value,
                    error = _err.message(),
                    "input value rejected by parse capability"
                );
                false
            }
        },
    }
}

impl<S: ScalarValue> MetaType<S> {
    /// Checks whether a raw `value` can be used where this type is expected.
    ///
    /// See [`is_valid_input()`] for the rules.
    pub fn is_valid_input(&self, value: &Value<S>) -> bool {
        is_valid_input(self, value)
    }
}
