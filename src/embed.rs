//! Embed-context detection.
//!
//! The grid can be hosted inside a constrained surface (a multiplexer pane, a
//! document viewer running us as a CGI-style child). In that case the layout
//! drops the heading and outer margin. Detection never fails: anything that
//! goes wrong while probing means "not embedded".

use std::borrow::Cow;
use std::env::{self, VarError};
use std::sync::OnceLock;

use url::form_urlencoded;

/// Variable carrying the location query string (`embed=1&...`)
pub const QUERY_VAR: &str = "QUERY_STRING";

/// Variables set by host multiplexers when we run inside one of their panes
pub const FRAME_VARS: [&str; 3] = ["TMUX", "ZELLIJ", "STY"];

/// Failure to read the ambient environment
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ProbeError {
    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),
}

/// Read-only access to the ambient environment.
pub trait Environment {
    /// Whether we are hosted inside a foreign frame
    fn in_foreign_frame(&self) -> Result<bool, ProbeError>;

    /// Raw query string of the current location, if any
    fn location_query(&self) -> Result<Option<String>, ProbeError>;
}

/// The real process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

fn read_var(name: &'static str) -> Result<Option<String>, ProbeError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ProbeError::NotUnicode(name)),
    }
}

impl Environment for ProcessEnvironment {
    fn in_foreign_frame(&self) -> Result<bool, ProbeError> {
        for name in FRAME_VARS {
            if read_var(name)?.is_some_and(|v| !v.is_empty()) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn location_query(&self) -> Result<Option<String>, ProbeError> {
        read_var(QUERY_VAR)
    }
}

/// Decoded value of the first `name` parameter in a query string.
///
/// Accepts an optional leading `?`. Keys and values are percent-decoded and
/// `+` reads as a space. A parameter without `=` has an empty value.
pub fn query_param<'q>(query: &'q str, name: &str) -> Option<Cow<'q, str>> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

fn probe(env: &dyn Environment) -> Result<bool, ProbeError> {
    let in_frame = env.in_foreign_frame()?;
    let query = env.location_query()?;
    let flagged = query
        .as_deref()
        .and_then(|q| query_param(q, "embed"))
        .is_some_and(|value| value == "1");
    Ok(in_frame || flagged)
}

/// Decide whether `env` describes an embedded context.
pub fn detect_embed(env: &dyn Environment) -> bool {
    probe(env).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "embed probe failed, assuming standalone");
        false
    })
}

/// Process-wide embed decision, computed on first use
pub fn is_embedded() -> bool {
    static EMBEDDED: OnceLock<bool> = OnceLock::new();
    *EMBEDDED.get_or_init(|| detect_embed(&ProcessEnvironment))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubEnvironment {
        frame: Result<bool, ProbeError>,
        query: Result<Option<String>, ProbeError>,
    }

    impl StubEnvironment {
        fn new(frame: bool, query: Option<&str>) -> Self {
            Self {
                frame: Ok(frame),
                query: Ok(query.map(str::to_string)),
            }
        }
    }

    impl Environment for StubEnvironment {
        fn in_foreign_frame(&self) -> Result<bool, ProbeError> {
            self.frame.clone()
        }

        fn location_query(&self) -> Result<Option<String>, ProbeError> {
            self.query.clone()
        }
    }

    #[test]
    fn test_embed_flag_without_frame() {
        assert!(detect_embed(&StubEnvironment::new(false, Some("embed=1"))));
    }

    #[test]
    fn test_embed_flag_with_leading_question_mark() {
        assert!(detect_embed(&StubEnvironment::new(false, Some("?theme=dark&embed=1"))));
    }

    #[test]
    fn test_embed_flag_must_be_literal_one() {
        assert!(!detect_embed(&StubEnvironment::new(false, Some("embed=true"))));
        assert!(!detect_embed(&StubEnvironment::new(false, Some("embed=0"))));
        assert!(!detect_embed(&StubEnvironment::new(false, Some("embed"))));
    }

    #[test]
    fn test_frame_alone_embeds() {
        assert!(detect_embed(&StubEnvironment::new(true, None)));
    }

    #[test]
    fn test_standalone() {
        assert!(!detect_embed(&StubEnvironment::new(false, None)));
    }

    #[test]
    fn test_frame_probe_failure_defaults_to_standalone() {
        let env = StubEnvironment {
            frame: Err(ProbeError::NotUnicode("TMUX")),
            query: Ok(Some("embed=1".to_string())),
        };
        assert!(!detect_embed(&env));
    }

    #[test]
    fn test_query_probe_failure_defaults_to_standalone() {
        let env = StubEnvironment {
            frame: Ok(true),
            query: Err(ProbeError::NotUnicode(QUERY_VAR)),
        };
        assert!(!detect_embed(&env));
    }

    #[test]
    fn test_embed_flag_percent_encoded() {
        assert!(detect_embed(&StubEnvironment::new(false, Some("embed=%31"))));
        assert!(detect_embed(&StubEnvironment::new(false, Some("%65mbed=1"))));
    }

    #[test]
    fn test_embed_flag_plus_decodes_to_space() {
        assert!(!detect_embed(&StubEnvironment::new(false, Some("embed=1+"))));
        assert_eq!(query_param("embed=1+", "embed").as_deref(), Some("1 "));
    }

    #[test]
    fn test_query_param_first_match_wins() {
        assert_eq!(query_param("embed=1&embed=0", "embed").as_deref(), Some("1"));
        assert_eq!(query_param("a=1&&b=2", "b").as_deref(), Some("2"));
        assert_eq!(query_param("embed", "embed").as_deref(), Some(""));
        assert_eq!(query_param("", "embed"), None);
    }
}
