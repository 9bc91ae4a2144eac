use {
    crate::{primitive::load, registry::lookup},
    bytemuck::bytes_of,
    def::DataType,
    std::{borrow::Cow, fmt},
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Numeric {
    // 0 or 1
    Bool(u8),
    Int8(i8),
    Uint8(u8),
    Int16(i16),
    Uint16(u16),
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Uint64(u64),
    Int128(i128),
    Float(f32),
    Double(f64),
}

impl Numeric {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Bool(v) => bytes_of(v),
            Self::Int8(v) => bytes_of(v),
            Self::Uint8(v) => bytes_of(v),
            Self::Int16(v) => bytes_of(v),
            Self::Uint16(v) => bytes_of(v),
            Self::Int32(v) => bytes_of(v),
            Self::Uint32(v) => bytes_of(v),
            Self::Int64(v) => bytes_of(v),
            Self::Uint64(v) => bytes_of(v),
            Self::Int128(v) => bytes_of(v),
            Self::Float(v) => bytes_of(v),
            Self::Double(v) => bytes_of(v),
        }
    }
}

enum Payload {
    Numeric(Numeric),
    // Empty payloads borrow a static slice and never allocate.
    Bytes(Cow<'static, [u8]>),
}

impl Payload {
    fn copy_bytes(value: &[u8]) -> Self {
        if value.is_empty() {
            Self::Bytes(Cow::Borrowed(&[]))
        } else {
            Self::Bytes(Cow::Owned(value.to_vec()))
        }
    }
}

/// A single value of any logical type, carried without static type
/// information.
///
/// Variable-length values are deep-copied into a buffer owned by the variant
/// and released on the next reset or on drop. The type is deliberately not
/// `Clone`; move it instead.
pub struct Variant {
    ty: DataType,
    payload: Payload,
}

impl Variant {
    /// Builds a variant from a cell of `ty`'s physical representation.
    ///
    /// # Panics
    ///
    /// Panics on `DataType::UnknownData`, or when a fixed-width `value` is
    /// shorter than the type's width.
    pub fn new(ty: DataType, value: &[u8]) -> Self {
        Self {
            ty,
            payload: Self::payload(ty, value),
        }
    }

    /// Replaces the held value, releasing any buffer owned by the previous
    /// one.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Variant::new`].
    pub fn reset(&mut self, ty: DataType, value: &[u8]) {
        // Release the old buffer before copying the new value.
        self.payload = Payload::Bytes(Cow::Borrowed(&[]));
        self.payload = Self::payload(ty, value);
        self.ty = ty;
    }

    /// Sets the variant to a `DataType::String`.
    pub fn reset_str(&mut self, data: &str) {
        self.reset_slice(data.as_bytes())
    }

    /// Sets the variant to a `DataType::String` holding `data`.
    pub fn reset_slice(&mut self, data: &[u8]) {
        self.reset(DataType::String, data)
    }

    /// Drops any owned buffer, leaving an empty `DataType::String`.
    pub fn clear(&mut self) {
        self.reset(DataType::String, &[])
    }

    pub fn data_type(&self) -> DataType {
        self.ty
    }

    /// The held value as a cell of the type's physical representation,
    /// valid until the variant is next mutated.
    pub fn value(&self) -> &[u8] {
        match &self.payload {
            Payload::Numeric(numeric) => numeric.as_bytes(),
            Payload::Bytes(bytes) => bytes.as_ref(),
        }
    }

    pub fn equals(&self, other: &Variant) -> bool {
        self.ty == other.ty && lookup(self.ty).compare(self.value(), other.value()).is_eq()
    }

    fn payload(ty: DataType, value: &[u8]) -> Payload {
        let numeric = match ty {
            DataType::UnknownData => {
                tracing::error!("variant reset with unknown data type");
                panic!("unknown data type: {}", ty)
            }

            DataType::IsDeleted | DataType::Bool => Numeric::Bool(u8::from(value[0] != 0)),
            DataType::Int8 => Numeric::Int8(load(value)),
            DataType::Uint8 => Numeric::Uint8(load(value)),
            DataType::Int16 => Numeric::Int16(load(value)),
            DataType::Uint16 => Numeric::Uint16(load(value)),
            DataType::Date | DataType::Decimal32 | DataType::Int32 => Numeric::Int32(load(value)),
            DataType::Uint32 => Numeric::Uint32(load(value)),
            DataType::Decimal64 | DataType::UnixtimeMicros | DataType::Int64 => {
                Numeric::Int64(load(value))
            }
            DataType::Uint64 => Numeric::Uint64(load(value)),
            DataType::Decimal128 | DataType::Int128 => Numeric::Int128(load(value)),
            DataType::Float => Numeric::Float(load(value)),
            DataType::Double => Numeric::Double(load(value)),

            DataType::String | DataType::Varchar | DataType::Binary => {
                return Payload::copy_bytes(value)
            }
        };

        Payload::Numeric(numeric)
    }

    #[cfg(test)]
    fn owns_buffer(&self) -> bool {
        matches!(self.payload, Payload::Bytes(Cow::Owned(_)))
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant")
            .field("type", &self.ty)
            .field("value", &lookup(self.ty).debug_string(self.value()))
            .finish()
    }
}

macro_rules! variant_conversions {
    ($(($raw:ty, $ty:ident),)*) => {
        $(
            impl From<$raw> for Variant {
                fn from(raw: $raw) -> Self {
                    Variant::new(DataType::$ty, bytes_of(&raw))
                }
            }
        )*
    };
}

variant_conversions! {
    (i8, Int8),
    (u8, Uint8),
    (i16, Int16),
    (u16, Uint16),
    (i32, Int32),
    (u32, Uint32),
    (i64, Int64),
    (u64, Uint64),
    (i128, Int128),
    (f32, Float),
    (f64, Double),
}

impl From<bool> for Variant {
    fn from(raw: bool) -> Self {
        Variant::new(DataType::Bool, &[u8::from(raw)])
    }
}

impl From<&str> for Variant {
    fn from(raw: &str) -> Self {
        Variant::new(DataType::String, raw.as_bytes())
    }
}

impl From<&[u8]> for Variant {
    fn from(raw: &[u8]) -> Self {
        Variant::new(DataType::Binary, raw)
    }
}
