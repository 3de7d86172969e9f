//! Pipe URI translation: `pipe://host:port` into `http://host:port`.

use pv_core::PipeResolver;
use pv_core::Resolution;
use url::Url;

/// Fallback shown when a pipe URI cannot be translated.
pub const DEFAULT_FALLBACK_URL: &str = "http://localhost:8000/";

const PIPE_SCHEME: &str = "pipe";

/// Classifying half of the translation: `Some` carries the rewritten HTTP
/// URL, `None` means the fixed fallback applies.
///
/// The scheme comparison is effectively case-insensitive because the `url`
/// crate lower-cases schemes during parsing. Path, query, and fragment are
/// dropped; only host and explicit port survive the rewrite.
pub fn translate(input: &str) -> Option<String> {
    let parsed = Url::parse(input).ok()?;
    if parsed.scheme() != PIPE_SCHEME {
        return None;
    }

    let host = parsed.host_str()?;
    let port = parsed.port()?;
    Some(format!("http://{host}:{port}"))
}

/// Rewrites pipe URIs into plain HTTP URLs, total over all input strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeUriTranslator {
    fallback_url: String,
}

impl Default for PipeUriTranslator {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_URL.to_owned())
    }
}

impl PipeUriTranslator {
    pub fn new(fallback_url: String) -> Self {
        Self { fallback_url }
    }

    pub fn fallback_url(&self) -> &str {
        &self.fallback_url
    }

    /// Total translation: every input produces a displayable URL. Parse
    /// errors never propagate; the only recourse in the UI is the fixed
    /// fallback.
    pub fn to_http(&self, input: &str) -> String {
        translate(input).unwrap_or_else(|| self.fallback_url.clone())
    }
}

impl PipeResolver for PipeUriTranslator {
    fn resolve(&self, input: &str) -> Resolution {
        match translate(input) {
            Some(url) => Resolution::Resolved { url },
            None => {
                tracing::debug!("pipe URI rejected, substituting fallback: `{input}`");
                Resolution::Fallback {
                    url: self.fallback_url.clone(),
                }
            }
        }
    }

    fn source_hint(&self) -> String {
        format!("{PIPE_SCHEME}://<host>:<port>")
    }
}

#[cfg(test)]
mod tests {
    use super::DEFAULT_FALLBACK_URL;
    use super::PipeUriTranslator;
    use super::translate;
    use pv_core::PipeResolver;
    use pv_core::Resolution;

    #[test]
    fn translates_host_and_port() {
        let translator = PipeUriTranslator::default();
        assert_eq!(
            translator.to_http("pipe://localhost:5000"),
            "http://localhost:5000"
        );
    }

    #[test]
    fn scheme_mismatch_yields_the_fallback() {
        let translator = PipeUriTranslator::default();
        assert_eq!(
            translator.to_http("http://localhost:5000"),
            DEFAULT_FALLBACK_URL
        );
    }

    #[test]
    fn unparseable_input_yields_the_fallback() {
        let translator = PipeUriTranslator::default();
        assert_eq!(translator.to_http("not a uri"), DEFAULT_FALLBACK_URL);
    }

    #[test]
    fn missing_port_yields_the_fallback() {
        let translator = PipeUriTranslator::default();
        assert_eq!(translator.to_http("pipe://localhost"), DEFAULT_FALLBACK_URL);
    }

    #[test]
    fn scheme_matching_is_case_insensitive() {
        assert_eq!(
            translate("PIPE://localhost:5000"),
            Some("http://localhost:5000".to_owned())
        );
    }

    #[test]
    fn path_and_query_are_dropped_from_the_rewrite() {
        assert_eq!(
            translate("pipe://db-host:9042/keyspace?x=1"),
            Some("http://db-host:9042".to_owned())
        );
    }

    #[test]
    fn scheme_only_uri_yields_the_fallback() {
        let translator = PipeUriTranslator::default();
        assert_eq!(translator.to_http("pipe:opaque"), DEFAULT_FALLBACK_URL);
    }

    #[test]
    fn configured_fallback_replaces_the_default() {
        let translator = PipeUriTranslator::new("http://127.0.0.1:9999/".to_owned());
        assert_eq!(translator.to_http("nope"), "http://127.0.0.1:9999/");
    }

    #[test]
    fn strategy_marks_fallback_resolutions_distinctly() {
        let translator = PipeUriTranslator::default();

        assert_eq!(
            translator.resolve("pipe://localhost:5000"),
            Resolution::Resolved {
                url: "http://localhost:5000".to_owned(),
            }
        );
        assert_eq!(
            translator.resolve("ftp://localhost:21"),
            Resolution::Fallback {
                url: DEFAULT_FALLBACK_URL.to_owned(),
            }
        );
    }
}
