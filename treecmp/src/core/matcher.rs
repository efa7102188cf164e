// src/core/matcher.rs
mod patterns;

pub use patterns::Patterns;

/// Include and exclude globs for one comparison run.
///
/// An empty include list means "everything". Excludes always win.
#[derive(Debug, Default, Clone)]
pub struct PatternSet {
    includes: Patterns,
    excludes: Patterns,
}

impl PatternSet {
    #[must_use]
    pub fn new<I: AsRef<str>, E: AsRef<str>>(includes: &[I], excludes: &[E]) -> Self {
        Self {
            includes: Patterns::from_strs(includes),
            excludes: Patterns::from_strs(excludes),
        }
    }

    /// Adds an exclude pattern after construction.
    #[inline]
    pub fn exclude(&mut self, pattern: &str) {
        self.excludes.add_pattern(pattern);
    }

    /// Whether `path` (relative, `/`-separated) takes part in the comparison.
    #[inline]
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let included = self.includes_everything() || self.includes.matches(path);
        included && !self.excludes.matches(path)
    }

    #[inline]
    #[must_use]
    pub fn includes_everything(&self) -> bool {
        self.includes.is_wildcard() || self.includes.is_empty()
    }
}

/// Free-function form of [`PatternSet::matches`].
#[inline]
#[must_use]
pub fn matches(path: &str, pattern_set: &PatternSet) -> bool {
    pattern_set.matches(path)
}
