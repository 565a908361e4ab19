// Take a look at the license at the top of the repository in the LICENSE file.

use crate::windows::last_error;
use crate::{Error, Memory, Result};

use std::mem::size_of;

use windows::Win32::System::SystemInformation::{GlobalMemoryStatusEx, MEMORYSTATUSEX};

pub(crate) fn memory() -> Result<Memory> {
    // The structure describes its own size so the API can tell which version the caller
    // was built against.
    let mut mem_info = MEMORYSTATUSEX {
        dwLength: size_of::<MEMORYSTATUSEX>() as u32,
        ..Default::default()
    };

    // SAFETY: `mem_info` is a valid, writable `MEMORYSTATUSEX` with `dwLength` set.
    if unsafe { GlobalMemoryStatusEx(&mut mem_info) }.is_err() {
        return Err(Error::native("GlobalMemoryStatusEx", last_error()));
    }

    Ok(Memory {
        total: mem_info.ullTotalPhys,
        ..Memory::default()
    })
}
