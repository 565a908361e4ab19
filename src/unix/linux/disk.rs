// Take a look at the license at the top of the repository in the LICENSE file.

use crate::sys::utils::{get_all_data, io_error};
use crate::{Error, FileSystem, FileSystemList, FileSystemUsage, Result};

use libc::statvfs;
use std::ffi::CString;
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

const MOUNTS: &str = "read(mounts)";
const STATVFS: &str = "statvfs";

macro_rules! cast {
    ($x:expr) => {
        u64::from($x)
    };
}

pub(crate) fn file_system_list(proc_root: &Path) -> Result<FileSystemList> {
    let content = get_all_data(proc_root.join("mounts"), 16_385, MOUNTS)?;
    Ok(FileSystemList {
        list: parse_mounts(&content),
    })
}

pub(crate) fn file_system_usage(path: &Path) -> Result<FileSystemUsage> {
    let cpath = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| Error::native(STATVFS, libc::EINVAL))?;
    let mut stat: MaybeUninit<statvfs> = MaybeUninit::uninit();

    // SAFETY: `cpath` is NUL terminated and outlives the call, `stat` is writable.
    if unsafe { retry_eintr!(statvfs(cpath.as_ptr(), stat.as_mut_ptr())) } != 0 {
        return Err(io_error(STATVFS, &io::Error::last_os_error()));
    }
    // SAFETY: `statvfs` succeeded so the structure is initialized.
    let stat = unsafe { stat.assume_init() };

    // Block counts are expressed in fragments.
    let frsize = cast!(stat.f_frsize);
    Ok(FileSystemUsage::new(
        cast!(stat.f_blocks).saturating_mul(frsize),
        cast!(stat.f_bfree).saturating_mul(frsize),
        cast!(stat.f_bavail).saturating_mul(frsize),
        cast!(stat.f_files),
        cast!(stat.f_ffree),
    ))
}

// mounts format
// http://man7.org/linux/man-pages/man5/fstab.5.html
// fs_spec<space>fs_file<space>fs_vfstype<space>fs_mntops<space>fs_freq<space>fs_passno
fn parse_mounts(content: &str) -> Vec<FileSystem> {
    content
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let fs_spec = fields.next()?;
            let fs_file = fields.next()?;
            let fs_vfstype = fields.next()?;
            let fs_mntops = fields.next().unwrap_or("");
            Some(FileSystem {
                dev_name: unescape(fs_spec),
                dir_name: unescape(fs_file),
                type_name: type_name(fs_vfstype).to_owned(),
                sys_type_name: fs_vfstype.to_owned(),
                options: fs_mntops.to_owned(),
            })
        })
        .collect()
}

// The kernel escapes space, tab, newline and backslash as 3-digit octal sequences.
fn unescape(field: &str) -> String {
    field
        .replace("\\040", " ")
        .replace("\\011", "\t")
        .replace("\\012", "\n")
        .replace("\\134", "\\")
}

fn type_name(sys_type_name: &str) -> &'static str {
    match sys_type_name {
        "nfs" | "nfs4" | "cifs" | "smbfs" | "smb3" | "afs" | "ceph" | "glusterfs" | "9p"
        | "sshfs" | "fuse.sshfs" => "remote",
        "tmpfs" | "ramfs" | "devtmpfs" => "ram",
        "iso9660" | "udf" => "cdrom",
        "swap" => "swap",
        "rootfs" | "proc" | "sysfs" | "devpts" | "cgroup" | "cgroup2" | "pstore" | "securityfs"
        | "debugfs" | "tracefs" | "configfs" | "fusectl" | "mqueue" | "hugetlbfs" | "bpf"
        | "autofs" | "binfmt_misc" | "rpc_pipefs" | "nsfs" | "efivarfs" | "selinuxfs" => "none",
        _ => "local",
    }
}
