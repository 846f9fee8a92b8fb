//! Dotted-quad text to `u32` and back.

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::net::Ipv4Addr;

/// One decimal octet in [0,255], no leading zeros.
pub(crate) const OCTET: &str = r"(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])";

lazy_static! {
    static ref ADDR_RE: Regex =
        Regex::new(&format!(r"^{0}\.{0}\.{0}\.{0}$", OCTET)).expect("Not possible");
}

/// Folds four consecutive octet groups, starting at group `from`, into an address.
pub(crate) fn octets_to_u32(v: &Captures<'_>, from: usize) -> Option<u32> {
    (from..from + 4).try_fold(0u32, |acc, i| {
        let octet = v.get(i)?.as_str().parse::<u8>().ok()?;
        Some(acc << 8 | u32::from(octet))
    })
}

pub fn parse_address(s: &str) -> Result<u32> {
    ADDR_RE
        .captures(s)
        .and_then(|v| octets_to_u32(&v, 1))
        .ok_or_else(|| Error::InvalidAddress(s.to_owned()))
}

pub fn format_address(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn parse_known_addresses() {
        assert_eq!(0, parse_address("0.0.0.0").unwrap());
        assert_eq!(u32::MAX, parse_address("255.255.255.255").unwrap());
        assert_eq!(0x0A0A_0A01, parse_address("10.10.10.1").unwrap());
        assert_eq!(0xC0A8_0164, parse_address("192.168.1.100").unwrap());
    }

    #[test]
    fn reject_malformed_addresses() {
        for s in &[
            "",
            "1.2.3",
            "1.2.3.4.5",
            "256.0.0.1",
            "1.2.3.-4",
            "01.2.3.4",
            "1.2.3.4/24",
            " 1.2.3.4",
            "1,2,3,4",
            "a.b.c.d",
        ] {
            assert_eq!(
                Err(Error::InvalidAddress(s.to_string())),
                parse_address(s),
                "{:?} should be rejected",
                s
            );
        }
    }

    #[quickcheck]
    fn format_then_parse(ip: u32) -> bool {
        parse_address(&format_address(ip)) == Ok(ip)
    }

    #[quickcheck]
    fn parse_then_format(a: u8, b: u8, c: u8, d: u8) -> bool {
        let s = format!("{}.{}.{}.{}", a, b, c, d);
        parse_address(&s).map(format_address) == Ok(s)
    }
}
