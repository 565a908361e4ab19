// Take a look at the license at the top of the repository in the LICENSE file.

/// Physical memory, in bytes.
///
/// `total` is always non-zero after a successful query. The other fields stay at zero on
/// platforms only reporting the total (Windows).
///
/// ```no_run
/// use hoststat::Memory;
///
/// let mut mem = Memory::default();
/// mem.get().expect("memory is always available");
/// println!("{} bytes of RAM", mem.total);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Memory {
    /// Total physical memory.
    pub total: u64,
    /// `total - free`.
    pub used: u64,
    /// Memory not used for anything.
    pub free: u64,
    /// Memory available for new allocations without swapping, caches included.
    pub actual_free: u64,
    /// `total - actual_free`.
    pub actual_used: u64,
}

impl_get!(Memory => memory);

/// Swap space, in bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swap {
    /// Total swap space.
    pub total: u64,
    /// `total - free`.
    pub used: u64,
    /// Unused swap space.
    pub free: u64,
}

impl_get!(Swap => swap);
