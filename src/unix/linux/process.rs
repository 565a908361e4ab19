// Take a look at the license at the top of the repository in the LICENSE file.

use crate::native::split_multi_string;
use crate::sys::system::boot_time;
use crate::sys::utils::{
    clock_ticks, get_all_bytes, get_all_data, io_error, malformed, page_size, read_link,
};
use crate::{Pid, ProcArgs, ProcExe, ProcList, ProcMem, ProcState, ProcTime, Result, RunState};

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const PROC_DIR: &str = "opendir(proc)";
const PID_STAT: &str = "read([pid]/stat)";
const PID_STATM: &str = "read([pid]/statm)";
const PID_CMDLINE: &str = "read([pid]/cmdline)";
const PID_EXE: &str = "readlink([pid]/exe)";
const PID_CWD: &str = "readlink([pid]/cwd)";
const PID_ROOT: &str = "readlink([pid]/root)";

// Indexes in the fields returned by `parse_stat_file`.
const STATE: usize = 2;
const PPID: usize = 3;
const TTY_NR: usize = 6;
const MINFLT: usize = 9;
const MAJFLT: usize = 11;
const UTIME: usize = 13;
const STIME: usize = 14;
const PRIORITY: usize = 17;
const NICE: usize = 18;
const STARTTIME: usize = 21;
const PROCESSOR: usize = 38;

fn pid_path(proc_root: &Path, pid: Pid) -> PathBuf {
    proc_root.join(pid.0.to_string())
}

pub(crate) fn proc_list(proc_root: &Path) -> Result<ProcList> {
    let entries = fs::read_dir(proc_root).map_err(|e| io_error(PROC_DIR, &e))?;
    let mut list = entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            entry.file_name().to_str().and_then(|s| Pid::from_str(s).ok())
        })
        .collect::<Vec<_>>();
    list.sort_unstable();
    Ok(ProcList { list })
}

fn read_stat(proc_root: &Path, pid: Pid) -> Result<String> {
    get_all_data(pid_path(proc_root, pid).join("stat"), 1_024, PID_STAT)
}

fn field<T: FromStr>(parts: &[&str], index: usize) -> Result<T> {
    parts
        .get(index)
        .and_then(|v| T::from_str(v).ok())
        .ok_or_else(|| malformed(PID_STAT))
}

pub(crate) fn proc_state(proc_root: &Path, pid: Pid) -> Result<ProcState> {
    let data = read_stat(proc_root, pid)?;
    let parts = parse_stat_file(&data).ok_or_else(|| malformed(PID_STAT))?;

    Ok(ProcState {
        name: parts[1].to_owned(),
        state: parts
            .get(STATE)
            .and_then(|s| s.chars().next())
            .map(RunState::from)
            .ok_or_else(|| malformed(PID_STAT))?,
        ppid: Pid(field(&parts, PPID)?),
        tty: field(&parts, TTY_NR)?,
        priority: field(&parts, PRIORITY)?,
        nice: field(&parts, NICE)?,
        // Only reported since Linux 2.2.8.
        processor: field(&parts, PROCESSOR).unwrap_or(0),
    })
}

pub(crate) fn proc_mem(proc_root: &Path, pid: Pid) -> Result<ProcMem> {
    let statm = get_all_data(pid_path(proc_root, pid).join("statm"), 128, PID_STATM)?;
    let data = read_stat(proc_root, pid)?;
    let parts = parse_stat_file(&data).ok_or_else(|| malformed(PID_STAT))?;
    parse_proc_mem(&statm, &parts, page_size())
}

fn parse_proc_mem(statm: &str, stat_parts: &[&str], page_size: u64) -> Result<ProcMem> {
    let mut pages = statm.split_whitespace().map(u64::from_str);
    let mut next = || match pages.next() {
        Some(Ok(v)) => Ok(v.saturating_mul(page_size)),
        _ => Err(malformed(PID_STATM)),
    };
    let size = next()?;
    let resident = next()?;
    let share = next()?;

    let minor_faults = field(stat_parts, MINFLT)?;
    let major_faults = field(stat_parts, MAJFLT)?;
    Ok(ProcMem {
        size,
        resident,
        share,
        minor_faults,
        major_faults,
        page_faults: u64::saturating_add(minor_faults, major_faults),
    })
}

pub(crate) fn proc_time(proc_root: &Path, pid: Pid) -> Result<ProcTime> {
    let data = read_stat(proc_root, pid)?;
    let parts = parse_stat_file(&data).ok_or_else(|| malformed(PID_STAT))?;
    parse_proc_time(&parts, boot_time(proc_root)?, clock_ticks())
}

fn parse_proc_time(parts: &[&str], boot_time: u64, clock_ticks: u64) -> Result<ProcTime> {
    let to_ms = |ticks: u64| ticks.saturating_mul(1_000) / clock_ticks;

    let user = to_ms(field(parts, UTIME)?);
    let sys = to_ms(field(parts, STIME)?);
    let start_time = boot_time
        .saturating_mul(1_000)
        .saturating_add(to_ms(field(parts, STARTTIME)?));
    Ok(ProcTime {
        start_time,
        user,
        sys,
        total: user.saturating_add(sys),
    })
}

pub(crate) fn proc_args(proc_root: &Path, pid: Pid) -> Result<ProcArgs> {
    let data = get_all_bytes(pid_path(proc_root, pid).join("cmdline"), 4_096, PID_CMDLINE)?;
    Ok(ProcArgs {
        list: split_multi_string(&data),
    })
}

pub(crate) fn proc_exe(proc_root: &Path, pid: Pid) -> Result<ProcExe> {
    let path = pid_path(proc_root, pid);
    Ok(ProcExe {
        name: read_link(path.join("exe"), PID_EXE)?,
        cwd: read_link(path.join("cwd"), PID_CWD)?,
        root: read_link(path.join("root"), PID_ROOT)?,
    })
}

fn parse_stat_file(data: &str) -> Option<Vec<&str>> {
    // The stat file is "interesting" to parse, because spaces cannot
    // be used as delimiters. The second field stores the command name
    // surrounded by parentheses. Unfortunately, whitespace and
    // parentheses are legal parts of the command, so parsing has to
    // proceed like this: The first field is delimited by the first
    // whitespace, the second field is everything until the last ')'
    // in the entire string. All other fields are delimited by
    // whitespace.

    let mut parts = Vec::with_capacity(52);
    let mut data_it = data.splitn(2, ' ');
    parts.push(data_it.next()?);
    let mut data_it = data_it.next()?.rsplitn(2, ')');
    let data = data_it.next()?;
    parts.push(data_it.next()?);
    parts.extend(data.split_whitespace());
    // Remove command name '('
    if let Some(name) = parts[1].strip_prefix('(') {
        parts[1] = name;
    }
    Some(parts)
}
