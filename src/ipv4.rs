use crate::addr::{octets_to_u32, OCTET};
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt::{self, Display, Formatter};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub const MAX_PREFIX: u8 = 32;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Ipv4Cidr {
    net: u32,
    size: u8,
}

impl Ipv4Cidr {
    /// Builds the block of length `mask` that contains `net`, dropping host bits.
    pub fn new(mut net: u32, mask: u8) -> Result<Self> {
        if mask > MAX_PREFIX {
            return Err(Error::InvalidCidr(format!(
                "{}/{}",
                Ipv4Addr::from(net),
                mask
            )));
        }
        let size = MAX_PREFIX - mask;
        net &= !host_mask(size);
        Ok(Ipv4Cidr { net, size })
    }

    pub fn first_ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.net)
    }

    pub fn last_ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.to_range().1)
    }

    pub fn mask(&self) -> u8 {
        MAX_PREFIX - self.size
    }

    /// Number of addresses in the block; `/0` holds 2^32 of them.
    pub fn ip_count(&self) -> u64 {
        1u64 << self.size
    }

    pub fn contains_ip(&self, ip: &Ipv4Addr) -> bool {
        u32::from(*ip) & !host_mask(self.size) == self.net
    }

    pub fn contains_cidr(&self, cidr: &Ipv4Cidr) -> bool {
        self.size >= cidr.size && cidr.net & !host_mask(self.size) == self.net
    }

    /// Inclusive `(first, last)` addresses of the block.
    pub fn to_range(&self) -> (u32, u32) {
        (self.net, self.net | host_mask(self.size))
    }
}

fn host_mask(size: u8) -> u32 {
    u32::MAX
        .checked_shr(u32::from(MAX_PREFIX - size))
        .unwrap_or(0)
}

/// Splits `a.b.c.d/n` into the address as written (host bits kept) and `n`.
pub(crate) fn parse_cidr_parts(s: &str) -> Result<(u32, u8)> {
    lazy_static! {
        static ref RE: Regex = Regex::new(&format!(
            r"^{0}\.{0}\.{0}\.{0}/([0-9]|[12][0-9]|3[012])$",
            OCTET
        ))
        .expect("Not possible");
    }
    let invalid = || Error::InvalidCidr(s.to_owned());
    let v = RE.captures(s).ok_or_else(invalid)?;
    let ip = octets_to_u32(&v, 1).ok_or_else(invalid)?;
    let mask = v
        .get(5)
        .and_then(|r| r.as_str().parse::<u8>().ok())
        .ok_or_else(invalid)?;
    Ok((ip, mask))
}

impl FromStr for Ipv4Cidr {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let (ip, mask) = parse_cidr_parts(s)?;
        Ipv4Cidr::new(ip, mask)
    }
}

impl Display for Ipv4Cidr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.first_ip(), self.mask())
    }
}

/// Smallest interval `(start, end)` covering every block.
///
/// Gaps between the blocks are not checked: disjoint inputs yield the span
/// from the lowest base to the highest last address.
pub fn span<'a, I>(blocks: I) -> Result<(u32, u32)>
where
    I: IntoIterator<Item = &'a Ipv4Cidr>,
{
    let bounds = blocks.into_iter().fold(None, |acc: Option<(u32, u32)>, cidr| {
        let (from, to) = cidr.to_range();
        Some(match acc {
            None => (from, to),
            Some((start, end)) => (u32::min(start, from), u32::max(end, to)),
        })
    });
    match bounds {
        Some((start, end)) => {
            debug!(
                "span {} - {}",
                Ipv4Addr::from(start),
                Ipv4Addr::from(end)
            );
            Ok((start, end))
        }
        None => Err(Error::InvalidRange("no CIDR blocks given".to_owned())),
    }
}

/// Blocks covering an address interval, ordered by base address.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Ipv4CidrList {
    inner: BTreeMap<u32, Ipv4Cidr>,
}

impl Display for Ipv4CidrList {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for v in self.inner.values() {
            writeln!(f, "{}", v)?;
        }
        Ok(())
    }
}

impl Ipv4CidrList {
    /// Decomposes `[start, end]` into the fewest aligned blocks.
    ///
    /// Each step takes the block at the cursor limited both by the cursor's
    /// alignment and by the number of addresses left, whichever is smaller.
    pub fn from_range(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange(format!(
                "start ip {} must not exceed end ip {}",
                Ipv4Addr::from(start),
                Ipv4Addr::from(end)
            )));
        }
        let mut inner = BTreeMap::new();
        // u64 so the cursor can step past 255.255.255.255.
        let end = u64::from(end);
        let mut cur = u64::from(start);
        while cur <= end {
            let base = cur as u32;
            let aligned = MAX_PREFIX - base.trailing_zeros() as u8;
            let remaining = end - cur + 1;
            let fits = MAX_PREFIX - (63 - remaining.leading_zeros()) as u8;
            trace!(
                "at {}: aligned /{}, {} left fits /{}",
                Ipv4Addr::from(base),
                aligned,
                remaining,
                fits
            );
            let block = Ipv4Cidr::new(base, aligned.max(fits))?;
            debug!("block {}", block);
            inner.insert(block.net, block);
            cur += block.ip_count();
        }
        Ok(Ipv4CidrList { inner })
    }

    pub fn from_ip_range(start: Ipv4Addr, end: Ipv4Addr) -> Result<Self> {
        Self::from_range(u32::from(start), u32::from(end))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> btree_map::Values<'_, u32, Ipv4Cidr> {
        self.inner.values()
    }

    /// Bounding interval of the blocks.
    pub fn to_range(&self) -> Result<(u32, u32)> {
        span(self.iter())
    }
}

impl IntoIterator for Ipv4CidrList {
    type Item = Ipv4Cidr;
    type IntoIter = btree_map::IntoValues<u32, Ipv4Cidr>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_values()
    }
}

impl<'a> IntoIterator for &'a Ipv4CidrList {
    type Item = &'a Ipv4Cidr;
    type IntoIter = btree_map::Values<'a, u32, Ipv4Cidr>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
