
use {
    crate::{derived, traits, type_info::TypeInfo},
    def::DataType,
    once_cell::sync::Lazy,
};

static REGISTRY: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::new);

/// Process-wide registry, built on first use.
pub fn registry() -> &'static TypeRegistry {
    &REGISTRY
}

/// Descriptor of `ty` from the process-wide registry.
///
/// # Panics
///
/// Panics on `DataType::UnknownData`. Callers validate type ids against a
/// schema before reaching this layer.
pub fn lookup(ty: DataType) -> &'static TypeInfo {
    REGISTRY.lookup(ty)
}

/// One immutable descriptor per logical type, indexed by type id.
#[derive(Debug)]
pub struct TypeRegistry {
    infos: Vec<TypeInfo>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        let infos = DataType::ALL
            .into_iter()
            .map(Self::build)
            .collect::<Vec<_>>();

        debug_assert!(infos
            .iter()
            .enumerate()
            .all(|(i, info)| info.data_type().id() == i as i32));

        tracing::debug!(count = infos.len(), "built type registry");

        Self { infos }
    }

    fn build(ty: DataType) -> TypeInfo {
        match ty {
            DataType::Uint8 => TypeInfo::new::<traits::Uint8>(),
            DataType::Int8 => TypeInfo::new::<traits::Int8>(),
            DataType::Uint16 => TypeInfo::new::<traits::Uint16>(),
            DataType::Int16 => TypeInfo::new::<traits::Int16>(),
            DataType::Uint32 => TypeInfo::new::<traits::Uint32>(),
            DataType::Int32 => TypeInfo::new::<traits::Int32>(),
            DataType::Uint64 => TypeInfo::new::<traits::Uint64>(),
            DataType::Int64 => TypeInfo::new::<traits::Int64>(),
            DataType::Int128 => TypeInfo::new::<traits::Int128>(),
            DataType::Float => TypeInfo::new::<traits::Float>(),
            DataType::Double => TypeInfo::new::<traits::Double>(),
            DataType::Bool => TypeInfo::new::<traits::Bool>(),
            DataType::Binary => TypeInfo::new::<traits::Binary>(),

            DataType::String => TypeInfo::new::<derived::Str>(),
            DataType::Varchar => TypeInfo::new::<derived::Varchar>(),
            DataType::UnixtimeMicros => TypeInfo::new::<derived::UnixtimeMicros>(),
            DataType::Date => TypeInfo::new::<derived::Date>(),
            DataType::Decimal32 => TypeInfo::new::<derived::Decimal32>(),
            DataType::Decimal64 => TypeInfo::new::<derived::Decimal64>(),
            DataType::Decimal128 => TypeInfo::new::<derived::Decimal128>(),
            DataType::IsDeleted => TypeInfo::new::<derived::IsDeleted>(),

            DataType::UnknownData => unreachable!("UNKNOWN_DATA has no descriptor"),
        }
    }

    /// # Panics
    ///
    /// Panics on `DataType::UnknownData`.
    pub fn lookup(&self, ty: DataType) -> &TypeInfo {
        match usize::try_from(ty.id()).ok().and_then(|i| self.infos.get(i)) {
            Some(info) => info,
            None => {
                tracing::error!(type_id = ty.id(), "lookup of unknown data type");
                panic!("unknown data type: {}", ty)
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeInfo> {
        self.infos.iter()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
