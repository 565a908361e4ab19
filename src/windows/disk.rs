// Take a look at the license at the top of the repository in the LICENSE file.

use crate::native::{LargeInteger, read_multi_string};
use crate::windows::last_error;
use crate::{Error, FileSystem, FileSystemList, FileSystemUsage, Result};

use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use windows::Win32::Storage::FileSystem::{GetDiskFreeSpaceExW, GetLogicalDriveStringsA};
use windows::core::PCWSTR;

/// Lists the logical drives (`C:\`, `D:\`...). Only drive letters are known, so they are
/// used both as device and directory names.
pub(crate) fn file_system_list() -> Result<FileSystemList> {
    let drives = read_multi_string(
        "GetLogicalDriveStringsA",
        // SAFETY: the slice is valid for writes of its whole length, which is what the API
        // is told the buffer size is.
        |buffer| unsafe { GetLogicalDriveStringsA(Some(buffer)) },
        last_error,
    )?;

    Ok(FileSystemList {
        list: drives
            .into_iter()
            .map(|drive| FileSystem {
                dir_name: drive.clone(),
                dev_name: drive,
                ..FileSystem::default()
            })
            .collect(),
    })
}

pub(crate) fn file_system_usage(path: &Path) -> Result<FileSystemUsage> {
    let wide_path = path
        .as_os_str()
        .encode_wide()
        .chain(Some(0))
        .collect::<Vec<_>>();
    let mut available = LargeInteger::default();
    let mut total = LargeInteger::default();
    let mut total_free = LargeInteger::default();

    // SAFETY: `wide_path` is NUL terminated and outlives the call; the three out
    // pointers come from live, 8-byte aligned values.
    let ret = unsafe {
        GetDiskFreeSpaceExW(
            PCWSTR::from_raw(wide_path.as_ptr()),
            Some(available.as_mut_ptr()),
            Some(total.as_mut_ptr()),
            Some(total_free.as_mut_ptr()),
        )
    };
    if ret.is_err() {
        return Err(Error::native("GetDiskFreeSpaceExW", last_error()));
    }

    // No file node counts on Windows.
    Ok(FileSystemUsage::new(
        total.as_u64(),
        total_free.as_u64(),
        available.as_u64(),
        0,
        0,
    ))
}
