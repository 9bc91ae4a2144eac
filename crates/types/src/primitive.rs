//! Native in-memory representations backing the physical types.
//!
//! A fixed-width cell is the native-endian byte image of one of these values.
//! Cells are not required to be aligned.

use {
    bytemuck::Pod,
    core::{cmp::Ordering, mem::size_of},
    std::fmt::Display,
};

/// Reads a `T` from the first `size_of::<T>()` bytes of `cell`.
///
/// Panics if `cell` is shorter than `T`.
#[inline]
pub(crate) fn load<T: Pod>(cell: &[u8]) -> T {
    bytemuck::pod_read_unaligned(&cell[..size_of::<T>()])
}

pub trait Primitive: Copy + PartialOrd + Display + 'static {
    fn load(cell: &[u8]) -> Self;

    /// The unique next value above `self`, or `None` at the top of the domain.
    fn successor(self) -> Option<Self>;

    /// Appends the debug text of `self`.
    fn append_debug(self, out: &mut String) {
        out.push_str(&self.to_string());
    }
}

macro_rules! integer_primitives {
    ($($native:ty,)*) => {
        $(
            impl Primitive for $native {
                #[inline]
                fn load(cell: &[u8]) -> Self {
                    load(cell)
                }

                #[inline]
                fn successor(self) -> Option<Self> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

integer_primitives! {
    u8, i8, u16, i16, u32, i32, u64, i64, i128,
}

impl Primitive for bool {
    #[inline]
    fn load(cell: &[u8]) -> Self {
        cell[0] != 0
    }

    #[inline]
    fn successor(self) -> Option<Self> {
        (!self).then_some(true)
    }
}

/// Appends `{:e}` text with a signed exponent of at least two digits, the
/// way `%g` prints it (`1e+300`, `1.5e-07`).
fn append_exponent_form(text: &str, out: &mut String) {
    let Some((mantissa, exponent)) = text.split_once('e') else {
        out.push_str(text);
        return;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    out.push_str(mantissa);
    out.push('e');
    out.push(sign);
    if digits.len() < 2 {
        out.push('0');
    }
    out.push_str(digits);
}

// `$plain_max` is where shortest digits switch to exponent form, matching the
// significant digits `%g` keeps for the width.
macro_rules! float_primitives {
    ($($native:ty => $plain_max:literal,)*) => {
        $(
            impl Primitive for $native {
                #[inline]
                fn load(cell: &[u8]) -> Self {
                    load(cell)
                }

                // Next representable value toward positive infinity.
                fn successor(self) -> Option<Self> {
                    if self.is_nan() || self == <$native>::INFINITY {
                        return None;
                    }
                    if self == 0.0 {
                        return Some(<$native>::from_bits(1));
                    }

                    let bits = self.to_bits();
                    Some(<$native>::from_bits(if self > 0.0 { bits + 1 } else { bits - 1 }))
                }

                // Shortest round-trip digits.
                fn append_debug(self, out: &mut String) {
                    let magnitude = self.abs();
                    if magnitude == 0.0
                        || !magnitude.is_finite()
                        || (1e-4..$plain_max).contains(&magnitude)
                    {
                        out.push_str(&self.to_string());
                    } else {
                        append_exponent_form(&format!("{:e}", self), out);
                    }
                }
            }
        )*
    };
}

float_primitives! {
    f32 => 1e6,
    f64 => 1e15,
}

/// Orders two cells by their decoded values.
///
/// Unordered floating point pairs (NaN) compare as equal.
#[inline]
pub fn generic_compare<T: Primitive>(lhs: &[u8], rhs: &[u8]) -> Ordering {
    let (lhs, rhs) = (T::load(lhs), T::load(rhs));

    if lhs < rhs {
        Ordering::Less
    } else if lhs > rhs {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Whether `b` is the immediate successor of `a`.
///
/// `a < b` is checked first so the successor of the domain maximum is never
/// computed.
#[inline]
pub fn generic_are_consecutive<T: Primitive>(a: &[u8], b: &[u8]) -> bool {
    let (a, b) = (T::load(a), T::load(b));
    a < b && a.successor() == Some(b)
}
