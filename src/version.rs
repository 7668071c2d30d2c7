use std::{cmp::Ordering, fmt::{Display, Formatter}, str::FromStr};
#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::segment::rpmvercmp;

/// A package version in the pacman form `[epoch:]version[-release]`
///
/// Equality through `==` is structural. Ordering is only available through
/// `compare()` and friends, as a version without release compares equal to
/// any release of the same version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version {
    epoch: u64,
    version: String,
    release: String,
}

fn epoch_from_str(epoch: &str) -> Result<u64> {
    let parsed: i64 = match epoch.parse() {
        Ok(parsed) => parsed,
        Err(_) => return Err(Error::InvalidEpoch { epoch: epoch.into() }),
    };
    u64::try_from(parsed).map_err(|_| Error::NegativeEpoch { epoch: parsed })
}

impl Version {
    /// Parse a version string, surrounding whitespace is ignored.
    ///
    /// Everything before the first `:` is the epoch, which must be a
    /// non-negative integer. The rest is split at its first `-` into the
    /// version and the release, neither of which is validated further.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let (epoch, remaining) = match raw.split_once(':') {
            Some((epoch, remaining)) => (epoch_from_str(epoch)?, remaining),
            None => (0, raw),
        };
        let (version, release) = match remaining.split_once('-') {
            Some((version, release)) => (version, release),
            None => (remaining, ""),
        };
        log::trace!("Parsed version '{}' as epoch {}, version '{}', \
            release '{}'", raw, epoch, version, release);
        Ok(Self {
            epoch,
            version: version.into(),
            release: release.into(),
        })
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The release, empty if there was none
    pub fn release(&self) -> &str {
        &self.release
    }

    /// Compare against another version with `vercmp` semantics.
    ///
    /// Epochs go first, then versions, both through `rpmvercmp()`. Releases
    /// are only looked at when both sides have one, otherwise the two are
    /// considered equal at that point.
    pub fn compare(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal
        }
        let order = rpmvercmp(
            &self.epoch.to_string(), &other.epoch.to_string())
        .then_with(|| rpmvercmp(&self.version, &other.version))
        .then_with(||
            if self.release.is_empty() || other.release.is_empty() {
                Ordering::Equal
            } else {
                rpmvercmp(&self.release, &other.release)
            });
        log::trace!("Compared version '{}' to '{}': {:?}", self, other, order);
        order
    }

    pub fn equal(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.epoch > 0 {
            write!(f, "{}:", self.epoch)?;
        }
        write!(f, "{}", self.version)?;
        if ! self.release.is_empty() {
            write!(f, "-{}", self.release)?
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&[u8]> for Version {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::try_from(String::from_utf8_lossy(value).as_ref())
    }
}
