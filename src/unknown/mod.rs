// Take a look at the license at the top of the repository in the LICENSE file.

use crate::{
    Backend, Config, Cpu, CpuList, Error, FileSystemList, FileSystemUsage, LoadAverage, Memory,
    Metric, Pid, ProcArgs, ProcExe, ProcList, ProcMem, ProcState, ProcTime, Result, Support, Swap,
    Uptime,
};

use std::path::Path;

pub(crate) const IS_SUPPORTED_SYSTEM: bool = false;

/// Backend for targets without native support: every query fails with
/// [`Error::NotImplemented`].
#[derive(Debug, Clone)]
pub struct NativeBackend {
    config: Config,
}

impl NativeBackend {
    // Nothing to set up, nothing is ever queried.
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

    fn support(&self, _metric: Metric) -> Support {
        Support::Unsupported
    }

    fn memory(&self) -> Result<Memory> {
        Err(Error::NotImplemented)
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
        Err(Error::NotImplemented)
    }

    fn uptime(&self) -> Result<Uptime> {
        Err(Error::NotImplemented)
    }

    fn file_system_list(&self) -> Result<FileSystemList> {
        Err(Error::NotImplemented)
    }

    fn file_system_usage(&self, _path: &Path) -> Result<FileSystemUsage> {
        Err(Error::NotImplemented)
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
