// Take a look at the license at the top of the repository in the LICENSE file.

use std::path::{Path, PathBuf};

/// What a backend answers for a metric whose concept exists on the platform but which it
/// has no way to acquire (see [`Support::Unwired`][crate::Support::Unwired]).
///
/// Metrics the platform has no concept of at all always fail with
/// [`Error::NotImplemented`][crate::Error::NotImplemented], whatever this is set to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbsentMetric {
    /// Fail with [`Error::NotImplemented`][crate::Error::NotImplemented].
    #[default]
    NotImplemented,
    /// Succeed and leave the value zeroed.
    Zero,
}

/// Backend configuration.
///
/// ```
/// use hoststat::{AbsentMetric, Config};
///
/// let config = Config::new().with_absent_metric(AbsentMetric::Zero);
/// assert_eq!(config.absent_metric(), AbsentMetric::Zero);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    absent_metric: AbsentMetric,
    proc_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            absent_metric: AbsentMetric::default(),
            proc_root: PathBuf::from("/proc"),
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for unwired metrics.
    pub fn with_absent_metric(mut self, absent_metric: AbsentMetric) -> Self {
        self.absent_metric = absent_metric;
        self
    }

    /// Sets where the proc file system is mounted. Only used by the Linux backend.
    pub fn with_proc_root<P: Into<PathBuf>>(mut self, proc_root: P) -> Self {
        self.proc_root = proc_root.into();
        self
    }

    /// Returns the policy for unwired metrics.
    pub fn absent_metric(&self) -> AbsentMetric {
        self.absent_metric
    }

    /// Returns where the proc file system is read from.
    pub fn proc_root(&self) -> &Path {
        &self.proc_root
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check_default_config() {
        let config = Config::new();
        assert_eq!(config.absent_metric(), AbsentMetric::NotImplemented);
        assert_eq!(config.proc_root(), Path::new("/proc"));
    }

    #[test]
    fn check_config_builders() {
        let config = Config::new()
            .with_absent_metric(AbsentMetric::Zero)
            .with_proc_root("/host/proc");
        assert_eq!(config.absent_metric(), AbsentMetric::Zero);
        assert_eq!(config.proc_root(), Path::new("/host/proc"));
    }
}
