//! Dot-separated paths for nested document access.
//!
//! [`Path`] is a borrowed, unsized wrapper around `str`, in the same shape as
//! [`std::path::Path`]. Every string is a valid path: splitting on `.` yields
//! the key segments, and segments are opaque. An empty string is a single
//! empty segment, `"a..b"` contains an empty middle segment, and numeric
//! segments are ordinary keys that only gain index meaning when the traversal
//! lands them on a list. There is no normalization and no escaping, so a key
//! that itself contains a dot cannot be addressed through a path.

use std::fmt;

/// A borrowed dot-separated path into a [`Document`](super::Document).
///
/// `Path` is unsized and always used behind a reference. `&str` and `&String`
/// convert for free through [`AsRef`], so document methods accept plain
/// string literals:
///
/// ```
/// use burrow::Path;
///
/// let path = Path::new("user.profile.name");
/// assert_eq!(path.components().count(), 3);
/// assert_eq!(path.leaf(), "name");
/// assert!(!path.is_single());
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl Path {
    /// Wraps a string slice as a path.
    ///
    /// Total: there is no invalid path, so no fallible variant exists.
    pub fn new<S: AsRef<str> + ?Sized>(s: &S) -> &Path {
        // SAFETY: Path is #[repr(transparent)] over str, so the layouts match
        unsafe { &*(s.as_ref() as *const str as *const Path) }
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns an iterator over the path segments.
    ///
    /// Empty segments are preserved: `""` yields one empty segment and
    /// `"a..b"` yields `["a", "", "b"]`. The iterator always yields at least
    /// one segment.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.split('.')
    }

    /// Returns the number of segments. Always at least 1.
    pub fn len(&self) -> usize {
        self.inner.split('.').count()
    }

    /// Returns true if the path is a single segment with no dot.
    ///
    /// Single-segment paths address top-level entries directly.
    pub fn is_single(&self) -> bool {
        !self.inner.contains('.')
    }

    /// Returns the final segment.
    pub fn leaf(&self) -> &str {
        match self.inner.rfind('.') {
            Some(dot) => &self.inner[dot + 1..],
            None => &self.inner,
        }
    }

    /// Splits the path into everything before the final segment and the final
    /// segment itself. The front is `None` when the path is a single segment.
    pub fn split_leaf(&self) -> (Option<&Path>, &str) {
        match self.inner.rfind('.') {
            Some(dot) => (Some(Path::new(&self.inner[..dot])), &self.inner[dot + 1..]),
            None => (None, &self.inner),
        }
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl<'a> From<&'a str> for &'a Path {
    fn from(s: &'a str) -> Self {
        Path::new(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}
