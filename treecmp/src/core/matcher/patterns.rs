// src/core/matcher/patterns.rs
use glob::{MatchOptions, Pattern};
use tracing::warn;

/// `*` and `?` cross `/`, so `*/build/*` reaches `build` at any depth.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

#[derive(Debug, Clone)]
struct CompiledPattern {
    pattern: Pattern,
    /// The pattern with its leading `*/` removed, so `*/test/*` also sees a
    /// top-level `test/`.
    unanchored: Option<Pattern>,
    /// Contains `/`, so it never falls back to the bare file name.
    is_path_pattern: bool,
}

impl CompiledPattern {
    fn compile(glob_pattern: &str) -> Result<Self, glob::PatternError> {
        let pattern = Pattern::new(glob_pattern)?;
        let unanchored = match glob_pattern.strip_prefix("*/") {
            Some(rest) if !rest.is_empty() => Some(Pattern::new(rest)?),
            _ => None,
        };
        Ok(Self {
            pattern,
            unanchored,
            is_path_pattern: glob_pattern.contains('/'),
        })
    }

    fn matches(&self, path: &str, filename: &str) -> bool {
        self.pattern.matches_with(path, MATCH_OPTIONS)
            || self
                .unanchored
                .as_ref()
                .is_some_and(|rest| rest.matches_with(path, MATCH_OPTIONS))
            || (!self.is_path_pattern && self.pattern.matches_with(filename, MATCH_OPTIONS))
    }
}

/// An ordered list of compiled glob patterns.
///
/// Patterns that fail to compile are dropped with a warning; they can never
/// match anything.
#[derive(Debug, Default, Clone)]
pub struct Patterns {
    patterns: Vec<CompiledPattern>,
    wildcard: bool,
    requested: bool,
}

impl Patterns {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
            wildcard: false,
            requested: false,
        }
    }

    #[must_use]
    pub fn from_strs<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut compiled = Self::new();
        for pattern in patterns {
            compiled.add_pattern(pattern.as_ref());
        }
        compiled
    }

    /// Adds a pattern, expanding brace groups like `*.{rs,sol}`.
    ///
    /// Blank input is ignored. Returns the number of globs that compiled.
    #[inline]
    pub fn add_pattern(&mut self, pattern: &str) -> usize {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return 0;
        }
        let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
        self.requested = true;

        if pattern == "*" || pattern == "**" {
            self.wildcard = true;
        }

        let Some(expanded) = expand_braces(pattern) else {
            warn!(pattern, "unbalanced brace group in pattern; it will never match");
            return 0;
        };

        let mut added = 0;
        for glob_pattern in expanded {
            match CompiledPattern::compile(&glob_pattern) {
                Ok(compiled) => {
                    self.patterns.push(compiled);
                    added += 1;
                }
                Err(err) => {
                    warn!(pattern = %glob_pattern, error = %err, "invalid glob pattern; it will never match");
                }
            }
        }
        added
    }

    /// True when no non-blank pattern was ever added, valid or not.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.requested
    }

    /// True when this list contains a bare `*` or `**`.
    #[inline]
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Tests a `/`-separated relative path against every pattern.
    ///
    /// A pattern hits if it matches the path itself, or the path with the
    /// pattern's leading `*/` dropped (so `*/test/*` also sees a top-level
    /// `test/`), or, for patterns without a `/`, the file name alone.
    #[inline]
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        if self.wildcard {
            return true;
        }
        let path = path.strip_prefix("./").unwrap_or(path);
        let filename = path.rsplit('/').next().unwrap_or(path);

        self.patterns
            .iter()
            .any(|pattern| pattern.matches(path, filename))
    }
}

/// Expands the first `{a,b}` group, recursively. `None` on unbalanced braces.
fn expand_braces(pattern: &str) -> Option<Vec<String>> {
    let Some((prefix, suffix)) = pattern.split_once('{') else {
        return if pattern.contains('}') {
            None
        } else {
            Some(vec![pattern.to_owned()])
        };
    };
    let (alternatives, rest) = suffix.split_once('}')?;
    if prefix.contains('}') {
        return None;
    }

    let mut expanded = Vec::new();
    for alternative in alternatives.split(',').map(str::trim) {
        expanded.extend(expand_braces(&format!("{prefix}{alternative}{rest}"))?);
    }
    Some(expanded)
}
