/// Three-tier banding of the overall score. This is the only computation the
/// presentation layer performs on the score; it drives color everywhere a
/// score is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Good,
            60..=79 => Self::Fair,
            _ => Self::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    /// ANSI color code used when a score is printed.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "\x1b[32m",
            Self::Fair => "\x1b[33m",
            Self::Poor => "\x1b[31m",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Good => "🟢",
            Self::Fair => "🟡",
            Self::Poor => "🔴",
        }
    }
}
