use {
    crate::error::{Error, InvalidTypeSnafu, Result},
    std::fmt::Display,
};

macro_rules! define_types {
    ($($(#[$meta:meta])* $var:ident = $id:literal => $name:literal,)*) => {
        /// Logical column types understood by the storage engine.
        ///
        /// The discriminants are part of the persisted schema format. They are
        /// consumed here and must never be renumbered or reused.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i32)]
        pub enum DataType {
            $($(#[$meta])* $var = $id,)*

            /// Sentinel for an unset or unrecognized type. It has no descriptor.
            UnknownData = 999,
        }

        impl DataType {
            /// Every type that has a descriptor, in id order.
            pub const ALL: [DataType; [$(stringify!($var)),*].len()] = [$(Self::$var,)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$var => $name,)*
                    Self::UnknownData => "UNKNOWN_DATA",
                }
            }
        }

        impl TryFrom<i32> for DataType {
            type Error = Error;

            fn try_from(ty: i32) -> Result<Self> {
                match ty {
                    $($id => Ok(Self::$var),)*
                    _ => InvalidTypeSnafu { ty }.fail(),
                }
            }
        }
    };
}

define_types! {
    Uint8 = 0 => "UINT8",
    Int8 = 1 => "INT8",
    Uint16 = 2 => "UINT16",
    Int16 = 3 => "INT16",
    Uint32 = 4 => "UINT32",
    Int32 = 5 => "INT32",
    Uint64 = 6 => "UINT64",
    Int64 = 7 => "INT64",
    String = 8 => "STRING",
    Bool = 9 => "BOOL",
    Float = 10 => "FLOAT",
    Double = 11 => "DOUBLE",
    Binary = 12 => "BINARY",
    /// Microseconds since the unix epoch, stored as an `Int64`.
    UnixtimeMicros = 13 => "UNIXTIME_MICROS",
    Int128 = 14 => "INT128",
    Decimal32 = 15 => "DECIMAL32",
    Decimal64 = 16 => "DECIMAL64",
    Decimal128 = 17 => "DECIMAL128",
    /// Virtual column marking deleted rows. Only valid in projections.
    IsDeleted = 18 => "IS_DELETED",
    Varchar = 19 => "VARCHAR",
    /// Days since the unix epoch, stored as an `Int32`.
    Date = 20 => "DATE",
}

impl DataType {
    pub const fn id(self) -> i32 {
        self as i32
    }

    pub const fn is_variable_length(self) -> bool {
        matches!(self, Self::Binary | Self::String | Self::Varchar)
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for ty in DataType::ALL {
            assert_eq!(DataType::try_from(ty.id()).unwrap(), ty);
        }
    }

    #[test]
    fn persisted_numbering() {
        assert_eq!(DataType::Uint8.id(), 0);
        assert_eq!(DataType::String.id(), 8);
        assert_eq!(DataType::Binary.id(), 12);
        assert_eq!(DataType::UnixtimeMicros.id(), 13);
        assert_eq!(DataType::Date.id(), 20);
        assert_eq!(DataType::UnknownData.id(), 999);
        assert_eq!(DataType::ALL.len(), 21);
    }

    #[test]
    fn reject_unknown_ids() {
        assert!(matches!(
            DataType::try_from(999),
            Err(Error::InvalidType { ty: 999, .. })
        ));
        assert!(DataType::try_from(21).is_err());
        assert!(DataType::try_from(-1).is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(DataType::UnixtimeMicros.to_string(), "UNIXTIME_MICROS");
        assert_eq!(DataType::IsDeleted.to_string(), "IS_DELETED");
    }

    #[test]
    fn variable_length() {
        assert!(DataType::Varchar.is_variable_length());
        assert!(DataType::Binary.is_variable_length());
        assert!(!DataType::Int128.is_variable_length());
    }
}
