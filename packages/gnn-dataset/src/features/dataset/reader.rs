use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::errors::{DatasetError, Result};

/// Feed every non-blank line of a UTF-8 file to `handle` together with its
/// 1-based line number. The first error from `handle` stops the read; the
/// file is closed when this returns either way.
pub fn for_each_line<F>(path: &Path, mut handle: F) -> Result<usize>
where
    F: FnMut(usize, &str) -> Result<()>,
{
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => DatasetError::missing_resource(path).with_source(err),
        _ => DatasetError::io(format!("Cannot open {}: {}", path.display(), err)).with_source(err),
    })?;
    debug!("reading {}", path.display());

    let mut records = 0;
    for (line_idx, line) in BufReader::new(file).lines().enumerate() {
        let line_no = line_idx + 1;
        let line = line.map_err(|err| match err.kind() {
            io::ErrorKind::InvalidData => {
                DatasetError::format(path, line_no, "line is not valid UTF-8").with_source(err)
            }
            _ => DatasetError::from(err),
        })?;
        if line.trim().is_empty() {
            continue;
        }
        handle(line_no, &line)?;
        records += 1;
    }

    debug!("read {} records from {}", records, path.display());
    Ok(records)
}
