// Take a look at the license at the top of the repository in the LICENSE file.

use crate::{Error, Result};

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub(crate) fn io_error(call: &'static str, err: &io::Error) -> Error {
    Error::native(call, err.raw_os_error().unwrap_or(libc::EIO))
}

// Kernel files with unexpected content are reported like a failed read.
pub(crate) fn malformed(call: &'static str) -> Error {
    hoststat_debug!("{call}: unexpected content");
    Error::native(call, libc::EINVAL)
}

pub(crate) fn get_all_data<P: AsRef<Path>>(
    file_path: P,
    size: usize,
    call: &'static str,
) -> Result<String> {
    let mut file = File::open(file_path.as_ref()).map_err(|e| io_error(call, &e))?;
    let mut buf = String::with_capacity(size);
    file.read_to_string(&mut buf)
        .map_err(|e| io_error(call, &e))?;
    Ok(buf)
}

pub(crate) fn get_all_bytes<P: AsRef<Path>>(
    file_path: P,
    size: usize,
    call: &'static str,
) -> Result<Vec<u8>> {
    let mut file = File::open(file_path.as_ref()).map_err(|e| io_error(call, &e))?;
    let mut buf = Vec::with_capacity(size);
    file.read_to_end(&mut buf).map_err(|e| io_error(call, &e))?;
    Ok(buf)
}

pub(crate) fn read_link<P: AsRef<Path>>(path: P, call: &'static str) -> Result<String> {
    let target: PathBuf = std::fs::read_link(path.as_ref()).map_err(|e| io_error(call, &e))?;
    Ok(target.to_string_lossy().into_owned())
}

pub(crate) fn page_size() -> u64 {
    // SAFETY: `sysconf` has no memory safety requirement.
    match unsafe { libc::sysconf(libc::_SC_PAGESIZE) } {
        n if n > 0 => n as u64,
        _ => 4_096,
    }
}

pub(crate) fn clock_ticks() -> u64 {
    // SAFETY: `sysconf` has no memory safety requirement.
    match unsafe { libc::sysconf(libc::_SC_CLK_TCK) } {
        n if n > 0 => n as u64,
        _ => 100,
    }
}
