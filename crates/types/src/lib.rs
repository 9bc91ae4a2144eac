//! Physical and logical type layer of the columnar storage engine.
//!
//! Values are passed around as cells: `&[u8]` holding the native-endian image
//! of a fixed-width value, or the payload bytes of a variable-length one.
//! Every cell operation trusts its caller to pass the width its type implies.

pub mod derived;
pub mod escape;
pub mod primitive;
mod registry;
pub mod traits;
mod type_info;
mod variant;

pub use {
    def::DataType,
    registry::{lookup, registry, TypeRegistry},
    traits::DataTypeTraits,
    type_info::TypeInfo,
    variant::Variant,
};

/// Width of the largest in-memory cell handle, a borrowed byte slice.
pub const LARGEST_TYPE_SIZE: usize = core::mem::size_of::<&[u8]>();
