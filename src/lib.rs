//! Conversions between IPv4 address ranges and the CIDR blocks covering them.
//!
//! ```
//! use ipv4_cidr_range::{cidr_to_range, range_to_cidr_blocks};
//!
//! let blocks = range_to_cidr_blocks("10.10.10.0", "10.10.10.255").unwrap();
//! assert_eq!(vec!["10.10.10.0/24"], blocks);
//!
//! let (start, end) = cidr_to_range("10.10.10.0/24").unwrap();
//! assert_eq!(("10.10.10.0", "10.10.10.255"), (start.as_str(), end.as_str()));
//! ```

mod addr;
mod check;
pub mod class;
mod error;
pub mod ipv4;

pub use addr::{format_address, parse_address};
pub use check::{contains_ip, is_cidr_syntax};
pub use class::{mask_class, MaskClass};
pub use error::{Error, Result};
pub use ipv4::{Ipv4Cidr, Ipv4CidrList};

/// Minimal ordered list of `a.b.c.d/n` blocks covering `[start_ip, end_ip]`.
pub fn range_to_cidr_blocks(start_ip: &str, end_ip: &str) -> Result<Vec<String>> {
    let start = parse_address(start_ip)?;
    let end = parse_address(end_ip)?;
    let list = Ipv4CidrList::from_range(start, end)?;
    Ok(list.iter().map(Ipv4Cidr::to_string).collect())
}

/// First and last address of a single block.
pub fn cidr_to_range(cidr: &str) -> Result<(String, String)> {
    cidr_set_to_range(&[cidr])
}

/// Bounding interval of a set of blocks.
///
/// Blocks need not be contiguous; the result runs from the lowest base to the
/// highest last address regardless of what lies between.
pub fn cidr_set_to_range<S: AsRef<str>>(cidrs: &[S]) -> Result<(String, String)> {
    let blocks = cidrs
        .iter()
        .map(|s| s.as_ref().parse::<Ipv4Cidr>())
        .collect::<Result<Vec<_>>>()?;
    let (start, end) = ipv4::span(&blocks)?;
    Ok((format_address(start), format_address(end)))
}

/// Number of addresses in a block.
pub fn ip_count(cidr: &str) -> Result<u64> {
    Ok(cidr.parse::<Ipv4Cidr>()?.ip_count())
}
