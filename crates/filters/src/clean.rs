//! Lexical path cleaning shared by patterns and candidate paths.
//!
//! Both sides of a match go through [`clean`] so segment comparisons line up:
//! a pattern written as `docs/./guide/` and a candidate spelled
//! `docs//guide/intro.md` reduce to the same `docs/guide` prefix. Cleaning is
//! purely textual and never touches the filesystem, so symlinks are not
//! resolved and `..` is folded against the preceding element.

/// Returns the shortest lexically equivalent form of `path`.
///
/// The rules are applied left to right:
///
/// 1. Runs of `/` collapse into a single separator.
/// 2. `.` elements are dropped.
/// 3. A `..` element removes the preceding element unless that element is
///    itself `..`.
/// 4. `..` directly after the root of an absolute path is dropped.
///
/// A trailing separator is removed and an empty result becomes `.`.
///
/// # Examples
///
/// ```
/// use filters::clean;
///
/// assert_eq!(clean("docs/"), "docs");
/// assert_eq!(clean("a//b/./c/.."), "a/b");
/// assert_eq!(clean("../../x"), "../../x");
/// assert_eq!(clean("/../etc"), "/etc");
/// assert_eq!(clean(""), ".");
/// ```
#[must_use]
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_owned();
    }

    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ => {
                    if !rooted {
                        parts.push("..");
                    }
                }
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_owned()
    } else {
        joined
    }
}

/// Returns the cleaned directory portion of `path`.
///
/// Everything after the final separator is discarded and the remainder is
/// passed through [`clean`]. Paths without a separator live in `.`; direct
/// children of the root live in `/`.
///
/// # Examples
///
/// ```
/// use filters::parent;
///
/// assert_eq!(parent("docs/README.md"), "docs");
/// assert_eq!(parent("file.go"), ".");
/// assert_eq!(parent("/etc"), "/");
/// ```
#[must_use]
pub fn parent(path: &str) -> String {
    match path.rfind('/') {
        Some(index) => clean(&path[..=index]),
        None => ".".to_owned(),
    }
}
