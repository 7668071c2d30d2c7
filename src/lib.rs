//! Parse and compare package versions the way pacman's `vercmp` does.
//!
//! ```
//! use std::cmp::Ordering;
//!
//! let old = alpm_vercmp::parse("1.0~rc1-1").unwrap();
//! let new = alpm_vercmp::parse("1.0-1").unwrap();
//! assert!(old.less_than(&new));
//! assert_eq!(alpm_vercmp::vercmp("1:0.9", "1.0").unwrap(), Ordering::Greater);
//! ```

use std::cmp::Ordering;

mod error;
mod segment;
mod version;

pub use error::{Error, Result};
pub use segment::rpmvercmp;
pub use version::Version;

/// Parse a version string, see `Version::parse()`
pub fn parse(raw: &str) -> Result<Version> {
    Version::parse(raw)
}

/// Whether the string parses as a `Version`
pub fn is_valid(raw: &str) -> bool {
    parse(raw).is_ok()
}

/// Parse two version strings and compare them, like the `vercmp` tool
pub fn vercmp(a: &str, b: &str) -> Result<Ordering> {
    Ok(parse(a)?.compare(&parse(b)?))
}
