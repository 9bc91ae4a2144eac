mod data_type;
pub mod error;

pub use {
    data_type::DataType,
    error::{Error, Result},
};
