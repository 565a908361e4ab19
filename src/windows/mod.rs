// Take a look at the license at the top of the repository in the LICENSE file.

mod disk;
mod system;

use crate::backend::unwired;
use crate::{
    Backend, Config, Cpu, CpuList, Error, FileSystemList, FileSystemUsage, LoadAverage, Memory,
    Metric, Pid, ProcArgs, ProcExe, ProcList, ProcMem, ProcState, ProcTime, Result, Support, Swap,
    Uptime,
};

use std::path::Path;

pub(crate) const IS_SUPPORTED_SYSTEM: bool = true;

// `GetLastError`, read through std.
pub(crate) fn last_error() -> i32 {
    std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// Win32 backend.
///
/// Only [`Memory`] (total), [`FileSystemList`] (drive letters) and [`FileSystemUsage`] are
/// acquired. [`LoadAverage`] and [`Uptime`] are [`Support::Unwired`]: what they return
/// depends on [`Config::absent_metric`]. Everything else is [`Error::NotImplemented`].
#[derive(Debug, Clone)]
pub struct NativeBackend {
    config: Config,
}

impl NativeBackend {
    // Win32 needs no process-wide setup for the APIs used here.
    fn init(&mut self) {}
}

impl Default for NativeBackend {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Backend for NativeBackend {
    fn new(config: Config) -> Self {
        let mut backend = Self { config };
        backend.init();
        backend
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn support(&self, metric: Metric) -> Support {
        match metric {
            Metric::Memory | Metric::FileSystemList | Metric::FileSystemUsage => {
                Support::Supported
            }
            Metric::LoadAverage | Metric::Uptime => Support::Unwired,
            _ => Support::Unsupported,
        }
    }

    fn memory(&self) -> Result<Memory> {
        system::memory()
    }

    fn swap(&self) -> Result<Swap> {
        Err(Error::NotImplemented)
    }

    fn cpu(&self) -> Result<Cpu> {
        Err(Error::NotImplemented)
    }

    fn cpu_list(&self) -> Result<CpuList> {
        Err(Error::NotImplemented)
    }

    fn load_average(&self) -> Result<LoadAverage> {
        unwired(&self.config, Metric::LoadAverage)
    }

    fn uptime(&self) -> Result<Uptime> {
        unwired(&self.config, Metric::Uptime)
    }

    fn file_system_list(&self) -> Result<FileSystemList> {
        disk::file_system_list()
    }

    fn file_system_usage(&self, path: &Path) -> Result<FileSystemUsage> {
        disk::file_system_usage(path)
    }

    fn proc_list(&self) -> Result<ProcList> {
        Err(Error::NotImplemented)
    }

    fn proc_state(&self, _pid: Pid) -> Result<ProcState> {
        Err(Error::NotImplemented)
    }

    fn proc_mem(&self, _pid: Pid) -> Result<ProcMem> {
        Err(Error::NotImplemented)
    }

    fn proc_time(&self, _pid: Pid) -> Result<ProcTime> {
        Err(Error::NotImplemented)
    }

    fn proc_args(&self, _pid: Pid) -> Result<ProcArgs> {
        Err(Error::NotImplemented)
    }

    fn proc_exe(&self, _pid: Pid) -> Result<ProcExe> {
        Err(Error::NotImplemented)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::AbsentMetric;

    #[test]
    fn check_drive_letters() {
        let fs_list = NativeBackend::default()
            .file_system_list()
            .expect("GetLogicalDriveStringsA failed");
        assert!(!fs_list.list.is_empty());
        for fs in &fs_list.list {
            assert_eq!(fs.dev_name, fs.dir_name);
            assert!(fs.dev_name.ends_with(":\\"), "{}", fs.dev_name);
        }
    }

    #[test]
    fn check_unwired_metrics() {
        let backend = NativeBackend::default();
        assert_eq!(backend.load_average(), Err(Error::NotImplemented));
        assert_eq!(backend.uptime(), Err(Error::NotImplemented));

        let backend = NativeBackend::new(Config::new().with_absent_metric(AbsentMetric::Zero));
        assert_eq!(backend.load_average(), Ok(LoadAverage::default()));
        assert_eq!(backend.uptime(), Ok(Uptime::default()));
    }
}
