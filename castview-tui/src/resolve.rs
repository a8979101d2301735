use thiserror::Error;

use crate::api::ApiError;

/// A parsed profile route token.
///
/// Tokens come in two forms: `fid:<n>` names a numeric identity directly,
/// anything else is treated as a username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugToken {
    Fid(u64),
    Handle(String),
}

/// Identity resolution failure. Fatal to the initial render: the page shows
/// an error view and never a partial profile.
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("empty profile slug")]
    EmptySlug,

    #[error("invalid fid in slug {0:?}")]
    InvalidFid(String),

    #[error("no profile found for {0:?}")]
    NotFound(String),

    #[error("profile lookup failed: {0}")]
    Lookup(#[from] ApiError),
}

impl SlugToken {
    /// Parse a route token. Leading `@` on handles is accepted and stripped,
    /// matching what users paste from clients.
    pub fn parse(raw: &str) -> Result<Self, ResolutionError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ResolutionError::EmptySlug);
        }

        if let Some(rest) = raw.strip_prefix("fid:") {
            let fid: u64 = rest
                .parse()
                .map_err(|_| ResolutionError::InvalidFid(raw.to_string()))?;
            return Ok(SlugToken::Fid(fid));
        }

        let handle = raw.strip_prefix('@').unwrap_or(raw);
        if handle.is_empty() {
            return Err(ResolutionError::EmptySlug);
        }
        Ok(SlugToken::Handle(handle.to_string()))
    }

    /// Display form used in error messages and the window title.
    pub fn display(&self) -> String {
        match self {
            SlugToken::Fid(fid) => format!("fid:{}", fid),
            SlugToken::Handle(handle) => format!("@{}", handle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fid_token() {
        assert_eq!(SlugToken::parse("fid:3").unwrap(), SlugToken::Fid(3));
        assert_eq!(
            SlugToken::parse("fid:194372").unwrap(),
            SlugToken::Fid(194372)
        );
    }

    #[test]
    fn test_parse_handle_token() {
        assert_eq!(
            SlugToken::parse("dwr.eth").unwrap(),
            SlugToken::Handle("dwr.eth".to_string())
        );
    }

    #[test]
    fn test_parse_strips_at_prefix() {
        assert_eq!(
            SlugToken::parse("@varunsrin").unwrap(),
            SlugToken::Handle("varunsrin".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(
            SlugToken::parse(""),
            Err(ResolutionError::EmptySlug)
        ));
        assert!(matches!(
            SlugToken::parse("   "),
            Err(ResolutionError::EmptySlug)
        ));
        assert!(matches!(
            SlugToken::parse("@"),
            Err(ResolutionError::EmptySlug)
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_fid() {
        assert!(matches!(
            SlugToken::parse("fid:abc"),
            Err(ResolutionError::InvalidFid(_))
        ));
        assert!(matches!(
            SlugToken::parse("fid:"),
            Err(ResolutionError::InvalidFid(_))
        ));
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(SlugToken::parse("fid:3").unwrap().display(), "fid:3");
        assert_eq!(SlugToken::parse("@dwr").unwrap().display(), "@dwr");
    }
}
