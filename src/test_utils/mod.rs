mod fixtures;
mod webserver;

use std::io::Write;

use tempfile::TempPath;

pub use self::fixtures::{BOX_RECORD, MARINE_INSTITUTE_RECORD, MINIMAL_RECORD};
pub use self::webserver::MockWebserver;

pub fn create_temp_file_with_suffix(suffix: &str, content: &str) -> TempPath {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Unable to create test file.");

    write!(file, "{}", content).expect("Unable to write content to test file.");

    file.into_temp_path()
}
