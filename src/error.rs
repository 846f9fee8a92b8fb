use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text is not a dotted-quad IPv4 address.
    #[error("invalid IPv4 address: {0:?}")]
    InvalidAddress(String),
    /// Text is not `address/prefix`, or the prefix is out of range.
    #[error("invalid CIDR: {0:?}")]
    InvalidCidr(String),
    #[error("invalid range: {0}")]
    InvalidRange(String),
}
