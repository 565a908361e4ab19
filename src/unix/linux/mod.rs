// Take a look at the license at the top of the repository in the LICENSE file.

pub(crate) mod disk;
pub(crate) mod process;
pub(crate) mod system;
pub(crate) mod utils;

use crate::{
    Backend, Config, Cpu, CpuList, FileSystemList, FileSystemUsage, LoadAverage, Memory, Metric,
    Pid, ProcArgs, ProcExe, ProcList, ProcMem, ProcState, ProcTime, Result, Support, Swap, Uptime,
};

use std::path::Path;

pub(crate) const IS_SUPPORTED_SYSTEM: bool = true;

/// Backend reading procfs and `statvfs(3)`. Every metric is supported.
///
/// The proc file system location comes from [`Config::proc_root`].
#[derive(Debug, Clone)]
pub struct NativeBackend {
    config: Config,
}

impl NativeBackend {
    // Nothing to set up on Linux: every query opens what it needs and closes it before
    // returning.
    fn init(&mut self) {}

    fn proc_root(&self) -> &Path {
        self.config.proc_root()
    }
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
        Support::Supported
    }

    fn memory(&self) -> Result<Memory> {
        system::memory(self.proc_root())
    }

    fn swap(&self) -> Result<Swap> {
        system::swap(self.proc_root())
    }

    fn cpu(&self) -> Result<Cpu> {
        system::cpu(self.proc_root())
    }

    fn cpu_list(&self) -> Result<CpuList> {
        system::cpu_list(self.proc_root())
    }

    fn load_average(&self) -> Result<LoadAverage> {
        system::load_average(self.proc_root())
    }

    fn uptime(&self) -> Result<Uptime> {
        system::uptime(self.proc_root())
    }

    fn file_system_list(&self) -> Result<FileSystemList> {
        disk::file_system_list(self.proc_root())
    }

    fn file_system_usage(&self, path: &Path) -> Result<FileSystemUsage> {
        disk::file_system_usage(path)
    }

    fn proc_list(&self) -> Result<ProcList> {
        process::proc_list(self.proc_root())
    }

    fn proc_state(&self, pid: Pid) -> Result<ProcState> {
        process::proc_state(self.proc_root(), pid)
    }

    fn proc_mem(&self, pid: Pid) -> Result<ProcMem> {
        process::proc_mem(self.proc_root(), pid)
    }

    fn proc_time(&self, pid: Pid) -> Result<ProcTime> {
        process::proc_time(self.proc_root(), pid)
    }

    fn proc_args(&self, pid: Pid) -> Result<ProcArgs> {
        process::proc_args(self.proc_root(), pid)
    }

    fn proc_exe(&self, pid: Pid) -> Result<ProcExe> {
        process::proc_exe(self.proc_root(), pid)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Error, RunState};

    use std::fs;
    use std::os::unix::fs::symlink;

    // Builds a minimal procfs tree with a single process (pid 42).
    fn fake_proc() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        let root = dir.path();
        let write = |name: &str, content: &[u8]| {
            fs::write(root.join(name), content).expect("failed to write fake proc file");
        };

        write(
            "meminfo",
            b"MemTotal: 2048 kB\nMemFree: 512 kB\nMemAvailable: 1024 kB\n\
              SwapTotal: 100 kB\nSwapFree: 40 kB\n",
        );
        write(
            "stat",
            b"cpu  8 7 6 5 4 3 2 1\ncpu0 4 4 3 3 2 2 1 1\ncpu1 4 3 3 2 2 1 1 0\nbtime 1000\n",
        );
        write("loadavg", b"1.50 0.75 0.25 1/100 4242\n");
        write("uptime", b"123.45 200.00\n");
        write(
            "mounts",
            b"/dev/sda1 / ext4 rw 0 0\n/dev/sda2 /home\\040dir xfs ro 0 0\n",
        );

        fs::create_dir(root.join("42")).expect("failed to create pid directory");
        fs::create_dir(root.join("7")).expect("failed to create pid directory");
        write(
            "42/stat",
            b"42 (worker) R 7 42 42 0 -1 4194560 10 0 2 0 250 50 0 0 20 -5 1 0 300 \
              1 1 1 1 1 1 0 0 0 0 0 0 0 0 0 17 1 0 0 0 0 0",
        );
        write("42/statm", b"10 5 2 1 0 4 0\n");
        write("42/cmdline", b"/usr/bin/worker\0--verbose\0\0");
        symlink("/usr/bin/worker", root.join("42/exe")).expect("failed to create symlink");
        symlink("/var/lib/worker", root.join("42/cwd")).expect("failed to create symlink");
        symlink("/", root.join("42/root")).expect("failed to create symlink");
        dir
    }

    #[test]
    fn check_system_metrics() {
        let proc_dir = fake_proc();
        let backend = NativeBackend::new(Config::new().with_proc_root(proc_dir.path()));

        let mem = backend.memory().expect("memory failed");
        assert_eq!(mem.total, 2_048 * 1_024);
        assert_eq!(mem.actual_free, 1_024 * 1_024);

        let swap = backend.swap().expect("swap failed");
        assert_eq!(swap.used, 60 * 1_024);

        let cpu = backend.cpu().expect("cpu failed");
        assert_eq!(cpu.total(), 36);
        let cpus = backend.cpu_list().expect("cpu_list failed");
        assert_eq!(cpus.list.len(), 2);
        assert_eq!(cpus.list[1].user, 4);

        let load = backend.load_average().expect("load_average failed");
        assert_eq!(load.one, 1.50);
        assert_eq!(load.fifteen, 0.25);
        assert_eq!(backend.uptime().expect("uptime failed").length, 123.45);

        let fs_list = backend.file_system_list().expect("file_system_list failed");
        assert_eq!(fs_list.list.len(), 2);
        assert_eq!(fs_list.list[1].dir_name, "/home dir");
        assert_eq!(fs_list.list[1].options, "ro");
    }

    #[test]
    fn check_process_metrics() {
        let proc_dir = fake_proc();
        let backend = NativeBackend::new(Config::new().with_proc_root(proc_dir.path()));
        let pid = Pid(42);

        let procs = backend.proc_list().expect("proc_list failed");
        assert_eq!(procs.list, vec![Pid(7), Pid(42)]);

        let state = backend.proc_state(pid).expect("proc_state failed");
        assert_eq!(state.name, "worker");
        assert_eq!(state.state, RunState::Run);
        assert_eq!(state.ppid, Pid(7));
        assert_eq!(state.tty, 0);
        assert_eq!(state.priority, 20);
        assert_eq!(state.nice, -5);
        assert_eq!(state.processor, 1);

        let mem = backend.proc_mem(pid).expect("proc_mem failed");
        assert_eq!(mem.size, 10 * utils::page_size());
        assert_eq!(mem.page_faults, 12);

        let ticks = utils::clock_ticks();
        let time = backend.proc_time(pid).expect("proc_time failed");
        assert_eq!(time.user, 250 * 1_000 / ticks);
        assert_eq!(time.sys, 50 * 1_000 / ticks);
        assert_eq!(time.total, time.user + time.sys);
        assert_eq!(time.start_time, 1_000_000 + 300 * 1_000 / ticks);

        let args = backend.proc_args(pid).expect("proc_args failed");
        assert_eq!(args.list, vec!["/usr/bin/worker", "--verbose"]);

        let exe = backend.proc_exe(pid).expect("proc_exe failed");
        assert_eq!(exe.name, "/usr/bin/worker");
        assert_eq!(exe.cwd, "/var/lib/worker");
        assert_eq!(exe.root, "/");
    }

    #[test]
    fn check_missing_process() {
        let proc_dir = fake_proc();
        let backend = NativeBackend::new(Config::new().with_proc_root(proc_dir.path()));
        let pid = Pid(4_000_000);

        let expected = |call| {
            Err::<(), _>(Error::NativeCallFailed {
                call,
                code: libc::ENOENT,
            })
        };
        assert_eq!(backend.proc_state(pid).map(drop), expected("read([pid]/stat)"));
        assert_eq!(backend.proc_mem(pid).map(drop), expected("read([pid]/statm)"));
        assert_eq!(backend.proc_time(pid).map(drop), expected("read([pid]/stat)"));
        assert_eq!(backend.proc_args(pid).map(drop), expected("read([pid]/cmdline)"));
        assert_eq!(backend.proc_exe(pid).map(drop), expected("readlink([pid]/exe)"));
    }

    #[test]
    fn check_get_leaves_value_untouched_on_error() {
        let proc_dir = tempfile::tempdir().expect("failed to create temporary directory");
        let backend = NativeBackend::new(Config::new().with_proc_root(proc_dir.path()));

        let mut mem = Memory {
            total: 1,
            ..Memory::default()
        };
        assert!(mem.get_from(&backend).is_err());
        assert_eq!(mem.total, 1);
    }

    #[test]
    fn check_every_metric_is_supported() {
        let backend = NativeBackend::default();
        for metric in Metric::ALL {
            assert_eq!(backend.support(metric), Support::Supported, "{metric}");
        }
    }
}
