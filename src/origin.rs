use regex_automata::meta::{BuildError, Regex};
use std::fmt;

#[derive(Debug)]
pub enum PatternError {
    Build(Box<BuildError>),
    TooLong { length: usize, max: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Build(_) => write!(f, "failed to compile origin pattern"),
            PatternError::TooLong { length, max } => write!(
                f,
                "origin pattern length {} exceeds maximum allowed {}",
                length, max
            ),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Build(err) => Some(err.as_ref()),
            PatternError::TooLong { .. } => None,
        }
    }
}

const MAX_PATTERN_LENGTH: usize = 50_000;

/// One configured origin entry.
///
/// The entry is compared literally first and then as a pattern that must
/// match the whole origin. A plain origin such as `https://example.com`
/// therefore matches itself whichever comparison succeeds.
#[derive(Clone, Debug)]
pub struct OriginMatcher {
    source: String,
    pattern: Regex,
}

impl OriginMatcher {
    pub fn new<S: Into<String>>(source: S) -> Result<Self, PatternError> {
        let source = source.into();
        let pattern = Self::compile_pattern(&source)?;
        Ok(Self { source, pattern })
    }

    fn compile_pattern(pattern: &str) -> Result<Regex, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        // The bare pattern is checked on its own so a stray `)` cannot escape the anchors below.
        Regex::new(pattern).map_err(|err| PatternError::Build(Box::new(err)))?;
        Regex::new(&format!("^(?:{pattern})$")).map_err(|err| PatternError::Build(Box::new(err)))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.source == candidate || self.pattern.is_match(candidate)
    }
}

impl PartialEq for OriginMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for OriginMatcher {}

/// Origins a policy applies to.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AllowedOrigins {
    /// Matches every request origin.
    #[default]
    Any,
    /// Ordered matchers; the policy applies when any of them matches.
    List(Vec<OriginMatcher>),
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn list<I, S>(values: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        values
            .into_iter()
            .map(OriginMatcher::new)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::List)
    }

    /// A policy with no configured origins never participates in matching.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::List(matchers) if matchers.is_empty())
    }

    pub fn matches(&self, request_origin: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(matchers) => matchers.iter().any(|matcher| matcher.matches(request_origin)),
        }
    }
}

impl From<Vec<OriginMatcher>> for AllowedOrigins {
    fn from(matchers: Vec<OriginMatcher>) -> Self {
        Self::List(matchers)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
