use {
    crate::traits::DataTypeTraits,
    core::cmp::Ordering,
    def::DataType,
    std::fmt,
};

type AppendDebugFunc = fn(&[u8], &mut String);
type CompareFunc = fn(&[u8], &[u8]) -> Ordering;
type AreConsecutiveFunc = fn(&[u8], &[u8]) -> bool;

/// Runtime descriptor of a logical type, built from its [`DataTypeTraits`].
///
/// All cell arguments must hold a value of this type's physical
/// representation. This is not checked.
pub struct TypeInfo {
    ty: DataType,
    physical_type: DataType,
    name: &'static str,
    size: usize,
    min_value: &'static [u8],
    max_value: Option<&'static [u8]>,
    is_virtual: bool,
    append_func: AppendDebugFunc,
    compare_func: CompareFunc,
    are_consecutive_func: AreConsecutiveFunc,
}

impl TypeInfo {
    pub(crate) fn new<T: DataTypeTraits>() -> Self {
        Self {
            ty: T::TYPE,
            physical_type: <T::Physical as DataTypeTraits>::TYPE,
            name: T::NAME,
            size: T::SIZE,
            min_value: T::min_value(),
            max_value: T::max_value(),
            is_virtual: T::IS_VIRTUAL,
            append_func: T::append_debug_string,
            compare_func: T::compare,
            are_consecutive_func: T::are_consecutive,
        }
    }

    /// The type as declared in the schema.
    pub fn data_type(&self) -> DataType {
        self.ty
    }

    /// The type whose representation is actually stored.
    pub fn physical_type(&self) -> DataType {
        self.physical_type
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn byte_size(&self) -> usize {
        self.size
    }

    /// Whether the type may appear only in projections, never in a stored
    /// schema.
    pub fn is_virtual(&self) -> bool {
        self.is_virtual
    }

    pub fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering {
        (self.compare_func)(lhs, rhs)
    }

    /// Whether `b` is the immediate successor of `a`, which lets an exclusive
    /// bound `< b` be rewritten as the inclusive bound `<= a`.
    pub fn is_consecutive(&self, a: &[u8], b: &[u8]) -> bool {
        (self.are_consecutive_func)(a, b)
    }

    pub fn min_value(&self) -> &'static [u8] {
        self.min_value
    }

    pub fn max_value(&self) -> Option<&'static [u8]> {
        self.max_value
    }

    /// Replaces the contents of `dst` with the minimum cell.
    pub fn copy_min_value(&self, dst: &mut Vec<u8>) {
        dst.clear();
        dst.extend_from_slice(self.min_value);
    }

    pub fn is_min_value(&self, value: &[u8]) -> bool {
        self.compare(value, self.min_value).is_eq()
    }

    /// Always false for types without an upper bound.
    pub fn is_max_value(&self, value: &[u8]) -> bool {
        self.max_value
            .map_or(false, |max| self.compare(value, max).is_eq())
    }

    pub fn append_debug_string(&self, value: &[u8], out: &mut String) {
        (self.append_func)(value, out)
    }

    pub fn debug_string(&self, value: &[u8]) -> String {
        let mut out = String::new();
        self.append_debug_string(value, &mut out);
        out
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("type", &self.ty)
            .field("physical_type", &self.physical_type)
            .field("name", &self.name)
            .field("size", &self.size)
            .field("is_virtual", &self.is_virtual)
            .finish_non_exhaustive()
    }
}
