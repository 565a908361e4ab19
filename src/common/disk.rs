// Take a look at the license at the top of the repository in the LICENSE file.

use std::path::Path;

/// A mounted file system.
///
/// On platforms which only expose drive letters, `dev_name` and `dir_name` are the same
/// and the other fields are empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileSystem {
    /// Device or volume identifier (`/dev/sda1`, `C:\`).
    pub dev_name: String,
    /// Where it is mounted.
    pub dir_name: String,
    /// Coarse category derived from `sys_type_name`: `local`, `remote`, `ram`, `cdrom`,
    /// `swap` or `none` for pseudo file systems.
    pub type_name: String,
    /// File system type as named by the OS (`ext4`, `nfs4`...).
    pub sys_type_name: String,
    /// Mount options, comma separated.
    pub options: String,
}

/// Mounted file systems, in the order the OS enumerates them.
///
/// ```no_run
/// use hoststat::FileSystemList;
///
/// let mut fs_list = FileSystemList::default();
/// fs_list.get().expect("failed to list file systems");
/// for fs in &fs_list.list {
///     println!("{} on {}", fs.dev_name, fs.dir_name);
/// }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileSystemList {
    /// The file systems.
    pub list: Vec<FileSystem>,
}

impl_get!(FileSystemList => file_system_list);

/// Usage of the file system containing a given path.
///
/// Space is in bytes. `used` is always `total - free`; `avail` is what an unprivileged
/// user can still write and may be lower than `free` because of reserved blocks or quotas.
///
/// ```no_run
/// use hoststat::FileSystemUsage;
///
/// let mut usage = FileSystemUsage::default();
/// usage.get("/").expect("failed to get usage");
/// assert_eq!(usage.used, usage.total - usage.free);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileSystemUsage {
    /// Size of the file system.
    pub total: u64,
    /// Free space.
    pub free: u64,
    /// Free space available to unprivileged users.
    pub avail: u64,
    /// `total - free`.
    pub used: u64,
    /// Number of file nodes, 0 when the platform has no such concept.
    pub files: u64,
    /// Number of free file nodes, 0 when the platform has no such concept.
    pub free_files: u64,
}

impl FileSystemUsage {
    pub(crate) fn new(total: u64, free: u64, avail: u64, files: u64, free_files: u64) -> Self {
        Self {
            total,
            free,
            avail,
            used: total.saturating_sub(free),
            files,
            free_files,
        }
    }

    /// Replaces `self` with the usage of the file system containing `path`.
    ///
    /// On error `self` is left untouched.
    pub fn get<P: AsRef<Path>>(&mut self, path: P) -> crate::Result<()> {
        self.get_from(&crate::NativeBackend::default(), path)
    }

    /// Same as [`FileSystemUsage::get`] but queries `backend`.
    pub fn get_from<B: crate::Backend + ?Sized, P: AsRef<Path>>(
        &mut self,
        backend: &B,
        path: P,
    ) -> crate::Result<()> {
        *self = backend.file_system_usage(path.as_ref())?;
        Ok(())
    }
}
