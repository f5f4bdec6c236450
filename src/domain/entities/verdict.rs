//! Word-count verdict policy.

/// Minimum number of words for a payload to be accepted.
pub const MIN_ACCEPTED_WORDS: usize = 8;

/// Outcome of counting the words in a submitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    NotAcceptable,
}

impl Verdict {
    pub fn from_count(count: usize) -> Self {
        if count >= MIN_ACCEPTED_WORDS {
            Self::Accepted
        } else {
            Self::NotAcceptable
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Accepted => "OK",
            Self::NotAcceptable => "Not Acceptable",
        }
    }
}
