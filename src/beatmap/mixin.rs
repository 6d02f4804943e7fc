//! Line numbers attached to buffered lines and warnings.
//!
//! Lines of the buffered sections are resolved only when the input ends, so they carry the
//! line number they were read at to locate the warnings they raise.

/// A value read at a line of the beatmap file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLineMixin<T> {
    /// The value.
    content: T,
    /// Line number in the source, starts with 1.
    line: usize,
}

impl<T> SourceLineMixin<T> {
    /// Instances a new `SourceLineMixin`
    pub const fn new(content: T, line: usize) -> Self {
        Self { content, line }
    }

    /// Gets the value.
    pub const fn content(&self) -> &T {
        &self.content
    }

    /// Takes the value, dropping the line number.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Returns the line number, starts with 1.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Converts the value, keeping the line number.
    pub fn map<U, F>(self, f: F) -> SourceLineMixin<U>
    where
        F: FnOnce(T) -> U,
    {
        SourceLineMixin::new(f(self.content), self.line)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SourceLineMixin<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at line {}", self.content, self.line)
    }
}

impl<T: std::error::Error + 'static> std::error::Error for SourceLineMixin<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.content)
    }
}

/// Extension methods for `SourceLineMixin`.
pub trait SourceLineMixinExt {
    /// Instances a new `SourceLineMixin` at the given line.
    fn into_wrapper_line(self, line: usize) -> SourceLineMixin<Self>
    where
        Self: Sized,
    {
        SourceLineMixin::new(self, line)
    }
}

impl<T> SourceLineMixinExt for T {}
