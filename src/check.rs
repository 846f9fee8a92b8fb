use crate::addr::parse_address;
use crate::ipv4::Ipv4Cidr;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

/// Reports whether `ip` lies inside `cidr`. Anything unparsable is simply
/// not contained.
pub fn contains_ip(ip: &str, cidr: &str) -> bool {
    match (parse_address(ip), cidr.parse::<Ipv4Cidr>()) {
        (Ok(ip), Ok(cidr)) => cidr.contains_ip(&Ipv4Addr::from(ip)),
        _ => false,
    }
}

/// Loose shape check for `a.b.c.d/n`.
///
/// The separators match any character, the pattern is unanchored, and neither
/// octets nor prefix are range checked. Use `str::parse::<Ipv4Cidr>` for a
/// strict check.
pub fn is_cidr_syntax(s: &str) -> bool {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"[0-9]{1,3}.[0-9]{1,3}.[0-9]{1,3}.[0-9]{1,3}/[0-9]+")
                .expect("Not possible");
    }
    RE.is_match(s)
}
