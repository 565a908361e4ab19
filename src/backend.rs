// Take a look at the license at the top of the repository in the LICENSE file.

use crate::{
    AbsentMetric, Config, Cpu, CpuList, Error, FileSystemList, FileSystemUsage, LoadAverage,
    Memory, Pid, ProcArgs, ProcExe, ProcList, ProcMem, ProcState, ProcTime, Result, Swap, Uptime,
};

use std::fmt;
use std::path::Path;

/// The metric kinds a [`Backend`] can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// [`Memory`].
    Memory,
    /// [`Swap`].
    Swap,
    /// [`Cpu`].
    Cpu,
    /// [`CpuList`].
    CpuList,
    /// [`LoadAverage`].
    LoadAverage,
    /// [`Uptime`].
    Uptime,
    /// [`FileSystemList`].
    FileSystemList,
    /// [`FileSystemUsage`].
    FileSystemUsage,
    /// [`ProcList`].
    ProcList,
    /// [`ProcState`].
    ProcState,
    /// [`ProcMem`].
    ProcMem,
    /// [`ProcTime`].
    ProcTime,
    /// [`ProcArgs`].
    ProcArgs,
    /// [`ProcExe`].
    ProcExe,
}

impl Metric {
    /// Every metric kind.
    pub const ALL: [Metric; 14] = [
        Metric::Memory,
        Metric::Swap,
        Metric::Cpu,
        Metric::CpuList,
        Metric::LoadAverage,
        Metric::Uptime,
        Metric::FileSystemList,
        Metric::FileSystemUsage,
        Metric::ProcList,
        Metric::ProcState,
        Metric::ProcMem,
        Metric::ProcTime,
        Metric::ProcArgs,
        Metric::ProcExe,
    ];
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Metric::Memory => "Memory",
            Metric::Swap => "Swap",
            Metric::Cpu => "Cpu",
            Metric::CpuList => "CpuList",
            Metric::LoadAverage => "LoadAverage",
            Metric::Uptime => "Uptime",
            Metric::FileSystemList => "FileSystemList",
            Metric::FileSystemUsage => "FileSystemUsage",
            Metric::ProcList => "ProcList",
            Metric::ProcState => "ProcState",
            Metric::ProcMem => "ProcMem",
            Metric::ProcTime => "ProcTime",
            Metric::ProcArgs => "ProcArgs",
            Metric::ProcExe => "ProcExe",
        })
    }
}

/// How a backend obtains a given metric. This is fixed per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Support {
    /// The metric is read from the OS. The query can only fail with
    /// [`Error::NativeCallFailed`].
    Supported,
    /// The query always fails with [`Error::NotImplemented`].
    Unsupported,
    /// The platform has the concept but the backend cannot acquire it. The answer depends on
    /// [`Config::absent_metric`].
    Unwired,
}

/// The set of metric queries one operating system can answer.
///
/// Every query returns a freshly built value: a failing query never hands back a partially
/// filled record. Callers usually go through the `get` method of each metric type, which
/// uses [`NativeBackend`][crate::NativeBackend].
pub trait Backend: Send + Sync {
    /// Creates the backend and runs its one-time platform setup.
    fn new(config: Config) -> Self
    where
        Self: Sized;

    /// Returns the configuration this backend was created with.
    fn config(&self) -> &Config;

    /// Tells how `metric` is obtained on this platform.
    fn support(&self, metric: Metric) -> Support;

    /// Physical memory.
    fn memory(&self) -> Result<Memory>;
    /// Swap space.
    fn swap(&self) -> Result<Swap>;
    /// Aggregated CPU counters.
    fn cpu(&self) -> Result<Cpu>;
    /// Per core CPU counters.
    fn cpu_list(&self) -> Result<CpuList>;
    /// 1, 5 and 15 minutes load average.
    fn load_average(&self) -> Result<LoadAverage>;
    /// Time since boot.
    fn uptime(&self) -> Result<Uptime>;
    /// Mounted file systems.
    fn file_system_list(&self) -> Result<FileSystemList>;
    /// Space and inode usage of the file system containing `path`.
    fn file_system_usage(&self, path: &Path) -> Result<FileSystemUsage>;
    /// Running process ids.
    fn proc_list(&self) -> Result<ProcList>;
    /// Identity and scheduling state of `pid`.
    fn proc_state(&self, pid: Pid) -> Result<ProcState>;
    /// Memory of `pid`.
    fn proc_mem(&self, pid: Pid) -> Result<ProcMem>;
    /// CPU time of `pid`.
    fn proc_time(&self, pid: Pid) -> Result<ProcTime>;
    /// Command line of `pid`.
    fn proc_args(&self, pid: Pid) -> Result<ProcArgs>;
    /// Executable, working directory and root of `pid`.
    fn proc_exe(&self, pid: Pid) -> Result<ProcExe>;
}

/// Answers a query for a [`Support::Unwired`] metric according to `config`.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn unwired<T: Default>(config: &Config, _metric: Metric) -> Result<T> {
    match config.absent_metric() {
        AbsentMetric::Zero => Ok(T::default()),
        AbsentMetric::NotImplemented => {
            hoststat_debug!("{_metric} is not wired on this platform");
            Err(Error::NotImplemented)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check_unwired_policy() {
        let config = Config::new();
        assert_eq!(
            unwired::<LoadAverage>(&config, Metric::LoadAverage),
            Err(Error::NotImplemented)
        );

        let config = Config::new().with_absent_metric(AbsentMetric::Zero);
        assert_eq!(
            unwired::<Uptime>(&config, Metric::Uptime),
            Ok(Uptime::default())
        );
    }

    #[test]
    fn check_metric_all_is_complete() {
        let mut names = Metric::ALL.iter().map(|m| m.to_string()).collect::<Vec<_>>();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Metric::ALL.len());
    }
}
