use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use logging::debug_log;

use crate::args::PatternSource;
use crate::error::CliError;

/// Splits `reader` into entries.
///
/// With `zero_terminated` entries end at NUL bytes and are taken verbatim.
/// Otherwise entries end at newlines, a trailing `\r` is dropped, and lines
/// starting with `comment` (when given) are skipped. Empty entries are
/// dropped either way. Entries are decoded lossily as UTF-8.
pub(crate) fn read_list_from_reader<R: BufRead>(
    reader: &mut R,
    zero_terminated: bool,
    comment: Option<u8>,
    entries: &mut Vec<String>,
) -> io::Result<()> {
    let terminator = if zero_terminated { b'\0' } else { b'\n' };
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        if reader.read_until(terminator, &mut buffer)? == 0 {
            break;
        }

        if buffer.last() == Some(&terminator) {
            buffer.pop();
        }
        if !zero_terminated {
            if buffer.last() == Some(&b'\r') {
                buffer.pop();
            }
            if comment.is_some() && buffer.first() == comment.as_ref() {
                continue;
            }
        }

        if !buffer.is_empty() {
            entries.push(String::from_utf8_lossy(&buffer).into_owned());
        }
    }
    Ok(())
}

fn open(what: &'static str, path: &Path) -> Result<BufReader<File>, CliError> {
    // Reject directories with a clear message before opening.
    fsutil::file_exists(path)?;
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| CliError::Read {
            what,
            path: path.to_path_buf(),
            source,
        })
}

/// Resolves pattern sources into raw pattern strings, in order.
///
/// Pattern files are always newline-separated; `#` starts a comment line.
pub(crate) fn load_patterns(sources: &[PatternSource]) -> Result<Vec<String>, CliError> {
    let mut patterns = Vec::new();
    for source in sources {
        match source {
            PatternSource::Inline(pattern) => patterns.push(pattern.clone()),
            PatternSource::File(path) => {
                let before = patterns.len();
                let mut reader = open("pattern file", path)?;
                read_list_from_reader(&mut reader, false, Some(b'#'), &mut patterns).map_err(
                    |source| CliError::Read {
                        what: "pattern file",
                        path: path.clone(),
                        source,
                    },
                )?;
                debug_log!(
                    Cmd,
                    1,
                    "read {} patterns from {}",
                    patterns.len() - before,
                    path.display()
                );
            }
        }
    }
    Ok(patterns)
}

/// Reads every `--paths-from` list, using `stdin` for `-`.
pub(crate) fn load_paths<R: BufRead>(
    lists: &[impl AsRef<OsStr>],
    zero_terminated: bool,
    stdin: &mut R,
) -> Result<Vec<String>, CliError> {
    let mut paths = Vec::new();
    for list in lists {
        let list = list.as_ref();
        if list == OsStr::new("-") {
            read_list_from_reader(stdin, zero_terminated, None, &mut paths).map_err(|source| {
                CliError::Read {
                    what: "path list",
                    path: PathBuf::from("-"),
                    source,
                }
            })?;
            continue;
        }

        let path = Path::new(list);
        let mut reader = open("path list", path)?;
        read_list_from_reader(&mut reader, zero_terminated, None, &mut paths).map_err(
            |source| CliError::Read {
                what: "path list",
                path: path.to_path_buf(),
                source,
            },
        )?;
    }
    Ok(paths)
}
