/// Outcome of one resolved card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Like,
    Dislike,
}

impl Decision {
    #[must_use]
    pub const fn from_liked(liked: bool) -> Self {
        if liked { Self::Like } else { Self::Dislike }
    }

    #[must_use]
    pub const fn liked(self) -> bool {
        matches!(self, Self::Like)
    }

    /// Horizontal sign of the fly-off: `+1` for like, `-1` for dislike.
    #[must_use]
    pub const fn direction(self) -> f32 {
        match self {
            Self::Like => 1.0,
            Self::Dislike => -1.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

/// Session lifecycle.
///
/// Only moves `Loading -> Swiping -> Summary`, or back to `Loading` on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Swiping,
    Summary,
}

impl Phase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Swiping => "swiping",
            Self::Summary => "summary",
        }
    }
}
