//! Compile-time trait tables, one per physical representation.
//!
//! Every logical type implements [`DataTypeTraits`]. Physical types fill in
//! the whole table themselves (`Physical = Self`); derived types in
//! [`crate::derived`] name their physical type and inherit whatever they do
//! not override.

use {
    crate::{
        escape::hex_escape,
        primitive::{generic_are_consecutive, generic_compare, Primitive},
    },
    core::{cmp::Ordering, mem::size_of},
    def::DataType,
};

pub trait DataTypeTraits: 'static {
    /// The table whose in-memory representation this type reuses.
    type Physical: DataTypeTraits;

    const TYPE: DataType;
    const NAME: &'static str;
    const SIZE: usize = <Self::Physical as DataTypeTraits>::SIZE;
    const IS_VIRTUAL: bool = false;

    fn append_debug_string(cell: &[u8], out: &mut String) {
        <Self::Physical as DataTypeTraits>::append_debug_string(cell, out)
    }

    fn compare(lhs: &[u8], rhs: &[u8]) -> Ordering {
        <Self::Physical as DataTypeTraits>::compare(lhs, rhs)
    }

    /// Whether `b` is the immediate successor of `a`.
    fn are_consecutive(a: &[u8], b: &[u8]) -> bool {
        <Self::Physical as DataTypeTraits>::are_consecutive(a, b)
    }

    fn min_value() -> &'static [u8] {
        <Self::Physical as DataTypeTraits>::min_value()
    }

    /// `None` when the type has no upper bound.
    fn max_value() -> Option<&'static [u8]> {
        <Self::Physical as DataTypeTraits>::max_value()
    }
}

macro_rules! fixed_width_traits {
    (
        $(
            $(#[$meta:meta])*
            $marker:ident($native:ty, $name:literal, min: $min:expr, max: $max:expr),
        )*
    ) => {
        $(
            $(#[$meta])*
            pub struct $marker;

            impl DataTypeTraits for $marker {
                type Physical = Self;

                const TYPE: DataType = DataType::$marker;
                const NAME: &'static str = $name;
                const SIZE: usize = size_of::<$native>();

                fn append_debug_string(cell: &[u8], out: &mut String) {
                    <$native>::load(cell).append_debug(out);
                }

                fn compare(lhs: &[u8], rhs: &[u8]) -> Ordering {
                    generic_compare::<$native>(lhs, rhs)
                }

                fn are_consecutive(a: &[u8], b: &[u8]) -> bool {
                    generic_are_consecutive::<$native>(a, b)
                }

                fn min_value() -> &'static [u8] {
                    static MIN: [u8; size_of::<$native>()] = $min;
                    &MIN
                }

                fn max_value() -> Option<&'static [u8]> {
                    static MAX: [u8; size_of::<$native>()] = $max;
                    Some(&MAX)
                }
            }
        )*
    };
}

fixed_width_traits! {
    Uint8(u8, "uint8", min: u8::MIN.to_ne_bytes(), max: u8::MAX.to_ne_bytes()),
    Int8(i8, "int8", min: i8::MIN.to_ne_bytes(), max: i8::MAX.to_ne_bytes()),
    Uint16(u16, "uint16", min: u16::MIN.to_ne_bytes(), max: u16::MAX.to_ne_bytes()),
    Int16(i16, "int16", min: i16::MIN.to_ne_bytes(), max: i16::MAX.to_ne_bytes()),
    Uint32(u32, "uint32", min: u32::MIN.to_ne_bytes(), max: u32::MAX.to_ne_bytes()),
    Int32(i32, "int32", min: i32::MIN.to_ne_bytes(), max: i32::MAX.to_ne_bytes()),
    Uint64(u64, "uint64", min: u64::MIN.to_ne_bytes(), max: u64::MAX.to_ne_bytes()),
    Int64(i64, "int64", min: i64::MIN.to_ne_bytes(), max: i64::MAX.to_ne_bytes()),
    Int128(i128, "int128", min: i128::MIN.to_ne_bytes(), max: i128::MAX.to_ne_bytes()),

    /// Bounded by negative and positive infinity.
    Float(f32, "float", min: 0xff80_0000u32.to_ne_bytes(), max: 0x7f80_0000u32.to_ne_bytes()),
    Double(
        f64,
        "double",
        min: 0xfff0_0000_0000_0000u64.to_ne_bytes(),
        max: 0x7ff0_0000_0000_0000u64.to_ne_bytes()
    ),

    /// Stored as one byte, zero for false.
    Bool(bool, "bool", min: [0], max: [1]),
}

/// Variable-length bytes. A cell is the payload itself.
pub struct Binary;

impl DataTypeTraits for Binary {
    type Physical = Self;

    const TYPE: DataType = DataType::Binary;
    const NAME: &'static str = "binary";
    const SIZE: usize = crate::LARGEST_TYPE_SIZE;

    fn append_debug_string(cell: &[u8], out: &mut String) {
        out.push('"');
        hex_escape(cell, out);
        out.push('"');
    }

    fn compare(lhs: &[u8], rhs: &[u8]) -> Ordering {
        lhs.cmp(rhs)
    }

    // The only successor is `a` with a single NUL appended.
    fn are_consecutive(a: &[u8], b: &[u8]) -> bool {
        b.len() == a.len() + 1 && b[a.len()] == 0 && &b[..a.len()] == a
    }

    fn min_value() -> &'static [u8] {
        &[]
    }

    fn max_value() -> Option<&'static [u8]> {
        None
    }
}

#[cfg(test)]
mod tests {
    use {super::*, bytemuck::bytes_of};

    fn debug<T: DataTypeTraits>(cell: &[u8]) -> String {
        let mut out = String::new();
        T::append_debug_string(cell, &mut out);
        out
    }

    #[test]
    fn native_widths() {
        assert_eq!(Uint8::SIZE, 1);
        assert_eq!(Int16::SIZE, 2);
        assert_eq!(Uint32::SIZE, 4);
        assert_eq!(Double::SIZE, 8);
        assert_eq!(Int128::SIZE, 16);
        assert_eq!(Bool::SIZE, 1);
        assert_eq!(Binary::SIZE, size_of::<&[u8]>());
        assert_eq!(Binary::SIZE, crate::LARGEST_TYPE_SIZE);
    }

    #[test]
    fn sentinels_decode() {
        assert_eq!(i8::load(Int8::min_value()), i8::MIN);
        assert_eq!(u64::load(Uint64::max_value().unwrap()), u64::MAX);
        assert_eq!(i128::load(Int128::min_value()), i128::MIN);
        assert_eq!(f32::load(Float::min_value()), f32::NEG_INFINITY);
        assert_eq!(f64::load(Double::max_value().unwrap()), f64::INFINITY);
        assert!(!bool::load(Bool::min_value()));
        assert!(bool::load(Bool::max_value().unwrap()));
        assert!(Binary::min_value().is_empty());
        assert!(Binary::max_value().is_none());
    }

    #[test]
    fn debug_numbers() {
        assert_eq!(debug::<Int32>(bytes_of(&-17i32)), "-17");
        assert_eq!(debug::<Uint64>(bytes_of(&u64::MAX)), "18446744073709551615");
        assert_eq!(debug::<Int128>(bytes_of(&i128::MIN)), i128::MIN.to_string());
        assert_eq!(debug::<Double>(bytes_of(&3.5f64)), "3.5");
        assert_eq!(debug::<Float>(bytes_of(&0.1f32)), "0.1");
        assert_eq!(debug::<Double>(bytes_of(&1e300f64)), "1e+300");
        assert_eq!(debug::<Bool>(&[1]), "true");
        assert_eq!(debug::<Bool>(&[0]), "false");
    }

    #[test]
    fn debug_binary() {
        assert_eq!(debug::<Binary>(&[0x41, 0x00]), "\"\\x41\\x00\"");
        assert_eq!(debug::<Binary>(&[]), "\"\"");
    }

    #[test]
    fn binary_order() {
        assert_eq!(Binary::compare(b"abc", b"abd"), Ordering::Less);
        assert_eq!(Binary::compare(b"ab", b"abc"), Ordering::Less);
        assert_eq!(Binary::compare(b"\xff", b"a"), Ordering::Greater);
        assert_eq!(Binary::compare(b"", b""), Ordering::Equal);
    }

    #[test]
    fn binary_consecutive() {
        assert!(Binary::are_consecutive(b"abc", b"abc\0"));
        assert!(Binary::are_consecutive(b"", b"\0"));
        assert!(!Binary::are_consecutive(b"abc", b"abd"));
        assert!(!Binary::are_consecutive(b"abc", b"abc\x01"));
        assert!(!Binary::are_consecutive(b"abc", b"abc\0\0"));
        assert!(!Binary::are_consecutive(b"abc", b"abx\0"));
        assert!(!Binary::are_consecutive(b"abc\0", b"abc"));
    }
}
