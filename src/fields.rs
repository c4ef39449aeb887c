//! Typed fields and the values they carry.

/// A single typed datum attached to a log record.
///
/// Exactly one variant is ever populated; the enum representation makes it
/// impossible to read a payload through the wrong type. When rendered,
/// all integer variants become one JSON integer entry, both float widths
/// become one JSON number entry, and text becomes one JSON string entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    /// Machine-width signed integer.
    Int(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    /// Machine-width unsigned integer.
    Uint(usize),
    F32(f32),
    F64(f64),
    Str(String),
}

impl Value {
    /// Collapses the value into its JSON representation.
    ///
    /// Non-finite floats have no JSON number form and render as `null`.
    pub(crate) fn into_json(self) -> serde_json::Value {
        use serde_json::Value as Json;
        match self {
            Value::I8(v) => Json::from(v),
            Value::I16(v) => Json::from(v),
            Value::I32(v) => Json::from(v),
            Value::I64(v) => Json::from(v),
            Value::Int(v) => Json::from(v as i64),
            Value::U8(v) => Json::from(v),
            Value::U16(v) => Json::from(v),
            Value::U32(v) => Json::from(v),
            Value::U64(v) => Json::from(v),
            Value::Uint(v) => Json::from(v as u64),
            Value::F32(v) => Json::from(f64::from(v)),
            Value::F64(v) => Json::from(v),
            Value::Str(v) => Json::String(v),
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

value_from! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Int,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Uint,
    f32 => F32,
    f64 => F64,
    String => Str,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

/// A named [`Value`], supplied to exactly one log call.
///
/// Fields are move-only: a `Vec<Field>` handed to an emission call is
/// consumed by it, so a field can never be replayed into a second record.
/// Keys must be non-empty; emission rejects the whole record otherwise.
///
/// ```
/// use json_field_logger::Field;
///
/// let fields = vec![
///     Field::str("msg", "records added successfully"),
///     Field::i32("count", 2),
/// ];
/// # drop(fields);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: String,
    value: Value,
}

macro_rules! field_ctor {
    ($($(#[$doc:meta])* $name:ident: $ty:ty),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(key: impl Into<String>, value: $ty) -> Field {
                Field {
                    key: key.into(),
                    value: Value::from(value),
                }
            }
        )*
    };
}

impl Field {
    /// Creates a field from any supported scalar value.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Field {
        Field {
            key: key.into(),
            value: value.into(),
        }
    }

    field_ctor! {
        /// Creates an 8-bit signed integer field.
        i8: i8,
        /// Creates a 16-bit signed integer field.
        i16: i16,
        /// Creates a 32-bit signed integer field.
        i32: i32,
        /// Creates a 64-bit signed integer field.
        i64: i64,
        /// Creates a machine-width signed integer field.
        int: isize,
        /// Creates an 8-bit unsigned integer field.
        u8: u8,
        /// Creates a 16-bit unsigned integer field.
        u16: u16,
        /// Creates a 32-bit unsigned integer field.
        u32: u32,
        /// Creates a 64-bit unsigned integer field.
        u64: u64,
        /// Creates a machine-width unsigned integer field.
        uint: usize,
        /// Creates a 32-bit float field.
        f32: f32,
        /// Creates a 64-bit float field.
        f64: f64,
    }

    /// Creates a text field. The input is copied into the field.
    pub fn str(key: impl Into<String>, value: impl Into<String>) -> Field {
        Field {
            key: key.into(),
            value: Value::Str(value.into()),
        }
    }

    /// The field's key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The field's value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub(crate) fn into_parts(self) -> (String, Value) {
        (self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constructors_pick_the_matching_variant() {
        assert_eq!(*Field::i8("k", -1).value(), Value::I8(-1));
        assert_eq!(*Field::u64("k", u64::MAX).value(), Value::U64(u64::MAX));
        assert_eq!(*Field::int("k", -7).value(), Value::Int(-7));
        assert_eq!(*Field::uint("k", 7).value(), Value::Uint(7));
        assert_eq!(*Field::f32("k", 3.14).value(), Value::F32(3.14));
        assert_eq!(
            *Field::str("k", "hello").value(),
            Value::Str("hello".to_owned())
        );
    }

    #[test]
    fn text_is_copied_out_of_the_callers_buffer() {
        let mut original = String::from("Brian");
        let field = Field::str("name", original.as_str());
        original.clear();
        assert_eq!(*field.value(), Value::Str("Brian".to_owned()));
    }

    #[test]
    fn integers_render_as_json_integers() {
        assert_eq!(Value::I64(i64::MIN).into_json(), json!(i64::MIN));
        assert_eq!(Value::U64(u64::MAX).into_json(), json!(u64::MAX));
        assert_eq!(Value::U8(0).into_json(), json!(0));
    }

    #[test]
    fn floats_render_as_json_numbers() {
        assert_eq!(Value::F64(5.76).into_json(), json!(5.76));
        assert_eq!(Value::F32(3.141).into_json(), json!(f64::from(3.141f32)));
    }

    #[test]
    fn non_finite_floats_render_as_null() {
        assert_eq!(Value::F64(f64::NAN).into_json(), serde_json::Value::Null);
    }

    #[test]
    fn from_impls_match_the_typed_constructors() {
        assert_eq!(Field::new("k", 2i32), Field::i32("k", 2));
        assert_eq!(Field::new("k", "text"), Field::str("k", "text"));
        assert_eq!(Field::new("k", 2.5f64), Field::f64("k", 2.5));
    }
}
