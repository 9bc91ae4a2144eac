use snafu::{prelude::*, Backtrace};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("invalid data type id: {}", ty))]
    InvalidType { ty: i32, backtrace: Backtrace },
}

pub type Result<T> = std::result::Result<T, Error>;
