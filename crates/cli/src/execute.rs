use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use filters::PatternSet;
use filters::debug_filter::FilterTracer;
use fsutil::{Kind, WalkBuilder, create_if_not_exists, dir_exists, file_exists, find_dir_in_or_above};
use logging::{debug_log, info_log};

use crate::ExitCode;
use crate::args::ParsedArgs;
use crate::error::CliError;
use crate::input::{load_paths, load_patterns};

/// Evaluates every candidate and writes the selected ones.
pub(crate) fn execute<In, Out>(
    parsed: &ParsedArgs,
    stdin: &mut In,
    stdout: &mut Out,
) -> Result<ExitCode, CliError>
where
    In: BufRead,
    Out: Write,
{
    if !parsed.has_candidates() {
        return Err(CliError::usage(
            "no paths to evaluate (give PATH operands, --paths-from or --walk)",
        ));
    }

    let raw = load_patterns(&parsed.patterns)?;
    let set = PatternSet::new(&raw)?;
    info_log!(
        Misc,
        1,
        "using {} patterns ({} negated)",
        set.len(),
        set.iter().filter(|pattern| pattern.is_negated()).count()
    );
    debug_log!(Cmd, 2, "patterns: {:?}", set.patterns().collect::<Vec<_>>());

    let mut candidates = load_paths(&parsed.paths_from, parsed.from0, stdin)?;
    candidates.splice(
        0..0,
        parsed
            .paths
            .iter()
            .map(|path| path.to_string_lossy().into_owned()),
    );

    let walker = match &parsed.walk {
        Some(dir) => Some(open_walk(dir, parsed.anchor.as_deref())?),
        None => None,
    };

    let mut file_output;
    let out: &mut dyn Write = match &parsed.output {
        Some(path) => {
            file_output = open_output(path)?;
            &mut file_output
        }
        None => stdout,
    };

    let terminator = if parsed.from0 { b'\0' } else { b'\n' };
    let tracer = FilterTracer::new();
    let mut selected_any = false;

    let walked = walker.into_iter().flatten().map(|entry| {
        entry
            .map(|entry| entry.relative_str())
            .map_err(CliError::from)
    });
    for candidate in candidates.into_iter().map(Ok).chain(walked) {
        let candidate = candidate?;
        info_log!(Name, 2, "checking {candidate}");

        let matched = set.matches_with(&candidate, &tracer)?;
        if matched {
            info_log!(Skip, 1, "matched {candidate}");
        }
        if matched == parsed.unmatched {
            continue;
        }

        selected_any = true;
        if parsed.check {
            debug_log!(Cmd, 1, "--check satisfied by {candidate}");
            break;
        }
        out.write_all(candidate.as_bytes())
            .and_then(|()| out.write_all(&[terminator]))
            .map_err(CliError::Write)?;
    }

    out.flush().map_err(CliError::Write)?;
    tracer.summary();

    if parsed.check && !selected_any {
        return Ok(ExitCode::NoMatch);
    }
    Ok(ExitCode::Ok)
}

fn open_walk(dir: &Path, anchor: Option<&str>) -> Result<fsutil::Walker, CliError> {
    if !dir_exists(dir)? {
        return Err(CliError::usage(format!(
            "walk root '{}' does not exist",
            dir.display()
        )));
    }

    let root = match anchor {
        Some(name) => find_dir_in_or_above(dir, name)?.ok_or_else(|| {
            CliError::usage(format!(
                "no directory containing '{name}' found at or above '{}'",
                dir.display()
            ))
        })?,
        None => dir.to_path_buf(),
    };

    info_log!(Misc, 1, "walking {}", root.display());
    Ok(WalkBuilder::new(root).build()?)
}

fn open_output(path: &Path) -> Result<BufWriter<File>, CliError> {
    create_if_not_exists(path, Kind::File)?;
    file_exists(path)?;
    debug_log!(Cmd, 1, "writing selected paths to {}", path.display());
    File::create(path)
        .map(BufWriter::new)
        .map_err(CliError::Write)
}
