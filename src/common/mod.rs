// Take a look at the license at the top of the repository in the LICENSE file.

pub(crate) mod cpu;
pub(crate) mod disk;
pub(crate) mod memory;
pub(crate) mod process;
pub(crate) mod system;

use std::fmt;
use std::str::FromStr;

/// A process id.
///
/// ```
/// use hoststat::Pid;
///
/// let pid = Pid::from_u32(1);
/// assert_eq!(pid.as_u32(), 1);
/// assert_eq!("1".parse::<Pid>(), Ok(pid));
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Pid(pub(crate) u32);

impl Pid {
    /// Creates a `Pid` from a raw process id.
    pub const fn from_u32(pid: u32) -> Self {
        Self(pid)
    }

    /// Returns the raw process id.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for Pid {
    fn from(pid: u32) -> Self {
        Self(pid)
    }
}

impl From<Pid> for u32 {
    fn from(pid: Pid) -> Self {
        pid.0
    }
}

impl FromStr for Pid {
    type Err = <u32 as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(u32::from_str(s)?))
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
