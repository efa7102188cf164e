// src/models/comparison_pair.rs
use serde::Serialize;

/// Which trees a path was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairKind {
    Common,
    LeftOnly,
    RightOnly,
}

/// Files from the two trees that share a relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonPair {
    Common {
        path: String,
        left: String,
        right: String,
    },
    LeftOnly {
        path: String,
        content: String,
    },
    RightOnly {
        path: String,
        content: String,
    },
}

impl ComparisonPair {
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Common { path, .. } | Self::LeftOnly { path, .. } | Self::RightOnly { path, .. } => {
                path
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PairKind {
        match self {
            Self::Common { .. } => PairKind::Common,
            Self::LeftOnly { .. } => PairKind::LeftOnly,
            Self::RightOnly { .. } => PairKind::RightOnly,
        }
    }

    /// Left and right contents, with a missing side read as empty.
    #[inline]
    #[must_use]
    pub fn sides(&self) -> (&str, &str) {
        match self {
            Self::Common { left, right, .. } => (left, right),
            Self::LeftOnly { content, .. } => (content, ""),
            Self::RightOnly { content, .. } => ("", content),
        }
    }
}
