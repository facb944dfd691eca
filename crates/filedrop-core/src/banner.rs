//! Status banner model.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a banner stays visible after it is shown.
pub const BANNER_VISIBLE: Duration = Duration::from_millis(3000);

/// Severity of a status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    /// The upload finished.
    Success,
    /// Nothing was selected, or the upload failed.
    Error,
}

impl StatusKind {
    /// CSS class carrying the kind-specific colors.
    #[must_use]
    pub const fn style_class(self) -> &'static str {
        match self {
            Self::Success => "status-success",
            Self::Error => "status-error",
        }
    }
}

/// Identifies one `show` call so its hide timer can be matched later.
///
/// Tokens increase monotonically for the lifetime of a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BannerToken(u64);

impl BannerToken {
    /// The token following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A visible status banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Text shown to the user.
    pub message: String,
    /// Severity, used for styling.
    pub kind: StatusKind,
    /// The `show` call that produced this banner.
    pub token: BannerToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_window_is_three_seconds() {
        assert_eq!(BANNER_VISIBLE.as_millis(), 3000);
    }

    #[test]
    fn tokens_increase() {
        let first = BannerToken::default();
        let second = first.next();
        assert!(second > first);
        assert_ne!(second.next(), second);
    }

    #[test]
    fn kinds_have_distinct_styles() {
        assert_ne!(
            StatusKind::Success.style_class(),
            StatusKind::Error.style_class()
        );
    }
}
