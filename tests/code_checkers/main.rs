// Take a look at the license at the top of the repository in the LICENSE file.

mod headers;

use std::path::Path;

#[test]
fn code_checks() {
    let mut nb_errors = 0;
    let mut nb_run = 0;

    for folder in ["src", "tests"] {
        let folder = Path::new(env!("CARGO_MANIFEST_DIR")).join(folder);
        headers::read_dirs(&folder, &mut |p: &Path, content: &str| {
            nb_run += 1;
            if !headers::check_license_header(content, p) {
                nb_errors += 1;
            }
        });
    }

    assert_eq!(nb_errors, 0);
    assert_ne!(nb_run, 0);
}
