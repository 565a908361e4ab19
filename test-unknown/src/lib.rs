// Take a look at the license at the top of the repository in the LICENSE file.

use hoststat::{Backend, FileSystemList, Memory, Metric, NativeBackend, Support};
use wasm_bindgen::prelude::*;

/// Returns `true` if every query reports itself as not implemented.
#[wasm_bindgen]
pub fn tester() -> bool {
    let backend = NativeBackend::default();
    let mut mem = Memory::default();
    let mut fs_list = FileSystemList::default();

    Metric::ALL
        .iter()
        .all(|metric| backend.support(*metric) == Support::Unsupported)
        && mem.get().is_err_and(|e| e.is_not_implemented())
        && fs_list.get().is_err_and(|e| e.is_not_implemented())
}
