//! Legacy classful (A/B/C) network boundaries.
//!
//! The class of an address depends only on its leading bits, never on the
//! prefix length it is written with: `10.10.10.0/24` is still class A.

use crate::error::Result;
use crate::ipv4::parse_cidr_parts;
use std::fmt::{self, Display, Formatter};

pub const CLASS_A_MASK: u32 = 0xFF00_0000;
pub const CLASS_B_MASK: u32 = 0xFFFF_0000;
pub const CLASS_C_MASK: u32 = 0xFFFF_FF00;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MaskClass {
    A,
    B,
    C,
    Unknown,
}

impl Default for MaskClass {
    fn default() -> Self {
        MaskClass::Unknown
    }
}

impl Display for MaskClass {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            MaskClass::A => "ANet",
            MaskClass::B => "BNet",
            MaskClass::C => "CNet",
            MaskClass::Unknown => "UnknownNet",
        })
    }
}

impl MaskClass {
    pub fn from_mask(mask: u32) -> Self {
        match mask {
            CLASS_A_MASK => MaskClass::A,
            CLASS_B_MASK => MaskClass::B,
            CLASS_C_MASK => MaskClass::C,
            _ => MaskClass::Unknown,
        }
    }

    /// Class of `ip` by its default mask.
    pub fn of(ip: u32) -> Self {
        Self::from_mask(default_mask(ip))
    }
}

/// Classful mask implied by the first octet. Class D and E space shares the
/// class C mask.
pub fn default_mask(ip: u32) -> u32 {
    match ip >> 24 {
        0..=0x7F => CLASS_A_MASK,
        0x80..=0xBF => CLASS_B_MASK,
        _ => CLASS_C_MASK,
    }
}

/// Classifies the address part of `a.b.c.d/n`, host bits included.
///
/// A malformed block is reported as an error; callers that only want the tag
/// can fall back with `unwrap_or_default()`, which yields `Unknown`.
pub fn mask_class(cidr: &str) -> Result<MaskClass> {
    let (ip, _) = parse_cidr_parts(cidr)?;
    Ok(MaskClass::of(ip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn class_ignores_prefix() {
        assert_eq!(Ok(MaskClass::A), mask_class("10.10.10.0/24"));
        assert_eq!(Ok(MaskClass::A), mask_class("127.255.0.0/32"));
        assert_eq!(Ok(MaskClass::B), mask_class("172.16.0.0/12"));
        assert_eq!(Ok(MaskClass::B), mask_class("128.0.0.0/8"));
        assert_eq!(Ok(MaskClass::C), mask_class("192.168.1.0/16"));
        assert_eq!(Ok(MaskClass::C), mask_class("224.0.0.1/4"));
        // host bits decide, not the network address
        assert_eq!(Ok(MaskClass::C), mask_class("200.0.0.0/1"));
    }

    #[test]
    fn class_of_malformed_block() {
        let r = mask_class("10.10.10.0");
        assert_eq!(Err(Error::InvalidCidr("10.10.10.0".to_owned())), r);
        assert_eq!(MaskClass::Unknown, r.unwrap_or_default());
        assert!(mask_class("10.10.10.0/40").is_err());
    }

    #[test]
    fn class_from_mask() {
        assert_eq!(MaskClass::Unknown, MaskClass::from_mask(0xFFFF_FFF0));
        assert_eq!(MaskClass::Unknown, MaskClass::from_mask(0));
        assert_eq!("ANet", MaskClass::A.to_string());
        assert_eq!("UnknownNet", MaskClass::default().to_string());
    }
}
