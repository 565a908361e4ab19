// Take a look at the license at the top of the repository in the LICENSE file.

use std::fs::{read_dir, read_to_string};
use std::path::Path;

const HEADER: &str =
    "// Take a look at the license at the top of the repository in the LICENSE file.";

fn show_error(p: &Path, err: &str) {
    eprintln!("=> [{}]: {}", p.display(), err);
}

pub(crate) fn check_license_header(content: &str, p: &Path) -> bool {
    let mut lines = content.lines();

    match lines.next() {
        Some(HEADER) => match lines.next() {
            Some("") => true,
            Some(s) => {
                show_error(
                    p,
                    &format!("Expected empty line after license header, found `{s}`"),
                );
                false
            }
            None => {
                show_error(p, "This file should very likely not exist...");
                false
            }
        },
        Some(s) => {
            show_error(
                p,
                &format!("Expected license header at the top of the file (`{HEADER}`), found: `{s}`"),
            );
            false
        }
        None => {
            show_error(p, "This (empty?) file should very likely not exist...");
            false
        }
    }
}

// Calls `f` on every Rust source file under `dir`.
pub(crate) fn read_dirs<F: FnMut(&Path, &str)>(dir: &Path, f: &mut F) {
    for entry in read_dir(dir).expect("read_dir failed") {
        let path = entry.expect("entry failed").path();
        if path.is_dir() {
            read_dirs(&path, f);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let content = read_to_string(&path).expect("read_to_string failed");
            f(&path, &content);
        }
    }
}
