//! Input value validation

mod input_value;

pub use self::input_value::is_valid_input;
