// Take a look at the license at the top of the repository in the LICENSE file.

#![doc = include_str!("../README.md")]
#![allow(unknown_lints)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(clippy::upper_case_acronyms)]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::assertions_on_constants)]

#[macro_use]
mod macros;

cfg_if::cfg_if! {
    if #[cfg(feature = "unknown-ci")] {
        // This is used in CI to check that the build for unknown targets is compiling fine.
        mod unknown;
        use crate::unknown as sys;
    } else if #[cfg(any(target_os = "linux", target_os = "android"))] {
        mod unix;
        use crate::unix::sys as sys;
    } else if #[cfg(windows)] {
        mod windows;
        use crate::windows as sys;
    } else {
        mod unknown;
        use crate::unknown as sys;
    }
}

mod backend;
mod common;
mod config;
mod error;
mod native;

pub use crate::backend::{Backend, Metric, Support};
pub use crate::common::Pid;
pub use crate::common::cpu::{Cpu, CpuList};
pub use crate::common::disk::{FileSystem, FileSystemList, FileSystemUsage};
pub use crate::common::memory::{Memory, Swap};
pub use crate::common::process::{
    ProcArgs, ProcExe, ProcList, ProcMem, ProcState, ProcTime, RunState,
};
pub use crate::common::system::{LoadAverage, Uptime};
pub use crate::config::{AbsentMetric, Config};
pub use crate::error::{Error, Result};

/// The backend of the operating system this crate was built for.
///
/// Every `get` method of the metric types goes through a default-configured instance of it.
pub use crate::sys::NativeBackend;

/// Returns `true` if this OS is supported. Please refer to the
/// [crate-level documentation](index.html) to get the list of supported OSes.
///
/// ```
/// if hoststat::IS_SUPPORTED_SYSTEM {
///     println!("This OS is supported!");
/// } else {
///     println!("This OS isn't supported (yet?).");
/// }
/// ```
pub const IS_SUPPORTED_SYSTEM: bool = crate::sys::IS_SUPPORTED_SYSTEM;

// FIXME: Can be removed once negative trait bounds are supported.
#[cfg(doctest)]
mod doctest {
    /// Check that `Backend` can be used as a trait object.
    ///
    /// ```no_run
    /// use hoststat::{Backend, Memory, NativeBackend};
    ///
    /// let backend: Box<dyn Backend> = Box::new(NativeBackend::default());
    /// let mut mem = Memory::default();
    /// let _ = mem.get_from(&*backend);
    /// ```
    ///
    /// But `Backend::new` is not available on it:
    ///
    /// ```compile_fail
    /// use hoststat::{Backend, Config, NativeBackend};
    ///
    /// let backend: Box<dyn Backend> = Box::new(NativeBackend::default());
    /// let other = <dyn Backend>::new(Config::default());
    /// ```
    mod backend_object {}
}
