// Primitives for locating and reading the polling files.

use std::path::{Path, PathBuf};

use crate::polls::*;

/// Resolves a file path against a base directory. Absolute paths are kept as is.
pub fn resolve_path(base_dir: &Path, file_path: &str) -> PathBuf {
    let p = Path::new(file_path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}

/// Reads all the lines of a text file.
///
/// Line terminators (`\n` or `\r\n`) are removed; a final line terminator
/// does not produce an empty line.
pub fn read_lines(path: &Path) -> PollResult<Vec<String>> {
    let display = path.display().to_string();
    info!("Attempting to read poll file {:?}", display);
    let contents = fs::read_to_string(path).context(FileAccessSnafu { path: display })?;
    let lines: Vec<String> = contents.lines().map(|l| l.to_string()).collect();
    debug!("read_lines: {} lines", lines.len());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_use_base_dir() {
        let base = Path::new("/data/polls");
        assert_eq!(
            resolve_path(base, "polling_data.csv"),
            PathBuf::from("/data/polls/polling_data.csv")
        );
        assert_eq!(
            resolve_path(base, "/tmp/other.csv"),
            PathBuf::from("/tmp/other.csv")
        );
    }

    #[test]
    fn missing_file_is_file_access_error() {
        let res = read_lines(Path::new("/this/file/does/not/exist.csv"));
        assert!(matches!(res, Err(PollError::FileAccess { .. })));
    }

    #[test]
    fn read_fixture_lines() {
        let p: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "polling_data.csv"]
            .iter()
            .collect();
        let lines = read_lines(&p).unwrap();
        assert_eq!(lines.len(), 81);
        assert_eq!(lines[0], "month,date,sample,harris_result,trump_result");
        assert!(lines.iter().all(|l| !l.ends_with('\n')));
    }
}
