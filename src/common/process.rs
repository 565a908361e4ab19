// Take a look at the license at the top of the repository in the LICENSE file.

use crate::Pid;

use std::fmt;

/// Running process ids.
///
/// ```no_run
/// use hoststat::{ProcList, ProcState};
///
/// let mut procs = ProcList::default();
/// procs.get().expect("failed to list processes");
/// for pid in procs.list {
///     let mut state = ProcState::default();
///     // The process may be gone already.
///     if state.get(pid).is_ok() {
///         println!("{pid} {} {}", state.name, state.state);
///     }
/// }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcList {
    /// Ids, in ascending order.
    pub list: Vec<Pid>,
}

impl_get!(ProcList => proc_list);

/// Scheduling state of a process.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    /// Sleeping, interruptibly or not.
    Sleep,
    /// Running or runnable.
    Run,
    /// Stopped or traced.
    Stop,
    /// Terminated, not yet reaped.
    Zombie,
    /// Idle kernel thread.
    Idle,
    /// Anything else, with the raw state character.
    Unknown(char),
    /// Not queried.
    #[default]
    None,
}

impl From<char> for RunState {
    fn from(state: char) -> RunState {
        match state {
            'S' | 'D' => RunState::Sleep,
            'R' => RunState::Run,
            'T' | 't' => RunState::Stop,
            'Z' => RunState::Zombie,
            'I' => RunState::Idle,
            x => RunState::Unknown(x),
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RunState::Sleep => f.write_str("Sleeping"),
            RunState::Run => f.write_str("Runnable"),
            RunState::Stop => f.write_str("Stopped"),
            RunState::Zombie => f.write_str("Zombie"),
            RunState::Idle => f.write_str("Idle"),
            RunState::Unknown(c) => write!(f, "Unknown({c})"),
            RunState::None => f.write_str("None"),
        }
    }
}

/// Identity and scheduling facts of a process.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcState {
    /// Command name, as stored by the kernel (possibly truncated).
    pub name: String,
    /// Scheduling state.
    pub state: RunState,
    /// Parent process id.
    pub ppid: Pid,
    /// Controlling terminal device number.
    pub tty: i32,
    /// Kernel scheduling priority.
    pub priority: i32,
    /// Nice value.
    pub nice: i32,
    /// CPU the process last ran on.
    pub processor: i32,
}

impl_get!(ProcState => proc_state(pid));

/// Memory of a process.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcMem {
    /// Virtual size, in bytes.
    pub size: u64,
    /// Resident set size, in bytes.
    pub resident: u64,
    /// Resident shared pages, in bytes.
    pub share: u64,
    /// Faults served without I/O.
    pub minor_faults: u64,
    /// Faults which required loading a page from disk.
    pub major_faults: u64,
    /// `minor_faults + major_faults`.
    pub page_faults: u64,
}

impl_get!(ProcMem => proc_mem(pid));

/// CPU time of a process, in milliseconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcTime {
    /// Start time, in milliseconds since the Unix epoch.
    pub start_time: u64,
    /// Time spent in user mode.
    pub user: u64,
    /// Time spent in kernel mode.
    pub sys: u64,
    /// `user + sys`.
    pub total: u64,
}

impl_get!(ProcTime => proc_time(pid));

/// Command line of a process.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcArgs {
    /// Arguments, program name first. Empty for kernel threads.
    pub list: Vec<String>,
}

impl_get!(ProcArgs => proc_args(pid));

/// Executable and directories of a process.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcExe {
    /// Path of the executable.
    pub name: String,
    /// Current working directory.
    pub cwd: String,
    /// Root directory.
    pub root: String,
}

impl_get!(ProcExe => proc_exe(pid));

#[cfg(test)]
mod test {
    use super::RunState;

    #[test]
    fn check_run_state_from_char() {
        assert_eq!(RunState::from('R'), RunState::Run);
        assert_eq!(RunState::from('S'), RunState::Sleep);
        assert_eq!(RunState::from('D'), RunState::Sleep);
        assert_eq!(RunState::from('T'), RunState::Stop);
        assert_eq!(RunState::from('t'), RunState::Stop);
        assert_eq!(RunState::from('Z'), RunState::Zombie);
        assert_eq!(RunState::from('I'), RunState::Idle);
        assert_eq!(RunState::from('X'), RunState::Unknown('X'));
        assert_eq!(RunState::default(), RunState::None);
    }

    #[test]
    fn check_display_impl_run_state() {
        assert_eq!(RunState::Run.to_string(), "Runnable");
        assert_eq!(RunState::Unknown('W').to_string(), "Unknown(W)");
    }
}
