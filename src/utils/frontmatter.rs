use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;

use crate::constants::{CRLF, FRONTMATTER_DELIMITER, LF};
use crate::error::{BoxError, FrontmatterError};
use crate::models::Frontmatter;

/// Decodes the text between the two delimiter lines into a metadata record.
pub trait MetadataDecoder {
    type Record: Default;
    type Error: Into<BoxError>;

    fn decode(&self, text: &str) -> Result<Self::Record, Self::Error>;
}

/// YAML decoder backed by `serde_yaml`. Blank metadata decodes to
/// `T::default()`.
pub struct YamlDecoder<T> {
    _record: PhantomData<fn() -> T>,
}

impl<T> YamlDecoder<T> {
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<T> Default for YamlDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned + Default> MetadataDecoder for YamlDecoder<T> {
    type Record = T;
    type Error = serde_yaml::Error;

    fn decode(&self, text: &str) -> Result<T, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(T::default());
        }
        serde_yaml::from_str(text)
    }
}

/// Result of splitting a document into frontmatter and body.
///
/// `body` is always usable: on error it is the whole input and
/// `frontmatter` is the default record.
#[derive(Debug)]
pub struct ParsedContent<'a, T> {
    pub frontmatter: T,
    pub body: &'a str,
    pub error: Option<FrontmatterError>,
}

impl<'a, T> ParsedContent<'a, T> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<(T, &'a str), FrontmatterError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok((self.frontmatter, self.body)),
        }
    }
}

/// Newline sequence of the opening delimiter, if the content starts with one.
fn opening_newline(content: &str) -> Option<&'static str> {
    let rest = content.strip_prefix(FRONTMATTER_DELIMITER)?;
    if rest.starts_with(CRLF) {
        Some(CRLF)
    } else if rest.starts_with(LF) {
        Some(LF)
    } else {
        None
    }
}

/// Splits content into raw frontmatter text and body, without decoding.
///
/// Returns `Ok(None)` when the content does not open with a delimiter line,
/// `Ok(Some((frontmatter_str, body)))` when a closing delimiter follows, and
/// `Err(FrontmatterError::Malformed)` otherwise. The closing delimiter must
/// use the same newline sequence as the opening one.
pub fn split_frontmatter(content: &str) -> Result<Option<(&str, &str)>, FrontmatterError> {
    let Some(newline) = opening_newline(content) else {
        return Ok(None);
    };

    let delimiter = format!("{FRONTMATTER_DELIMITER}{newline}");
    let mut parts = content.splitn(3, delimiter.as_str());
    parts.next(); // empty string before the opening delimiter

    match (parts.next(), parts.next()) {
        (Some(frontmatter_str), Some(body)) => Ok(Some((frontmatter_str, body))),
        _ => Err(FrontmatterError::Malformed),
    }
}

/// Splits and decodes frontmatter with the given decoder.
pub fn parse_frontmatter_with<'a, D>(content: &'a str, decoder: &D) -> ParsedContent<'a, D::Record>
where
    D: MetadataDecoder,
{
    let fallback = |error: FrontmatterError| ParsedContent {
        frontmatter: D::Record::default(),
        body: content,
        error: Some(error),
    };

    let (frontmatter_str, body) = match split_frontmatter(content) {
        Ok(Some(parts)) => parts,
        Ok(None) => {
            return ParsedContent {
                frontmatter: D::Record::default(),
                body: content,
                error: None,
            };
        }
        Err(err) => {
            debug!("frontmatter opened but never closed");
            return fallback(err);
        }
    };

    match decoder.decode(frontmatter_str) {
        Ok(frontmatter) => ParsedContent {
            frontmatter,
            body,
            error: None,
        },
        Err(err) => {
            let err = FrontmatterError::decode(err);
            debug!(error = %err, "frontmatter did not decode");
            fallback(err)
        }
    }
}

/// Splits content with optional YAML frontmatter into a typed record and body.
pub fn parse_frontmatter<T: DeserializeOwned + Default>(content: &str) -> ParsedContent<'_, T> {
    parse_frontmatter_with(content, &YamlDecoder::<T>::new())
}

/// Splits a cheatsheet into its [`Frontmatter`] and body.
pub fn split(document: &str) -> ParsedContent<'_, Frontmatter> {
    parse_frontmatter(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::helpers::{FailingDecoder, RecordingDecoder};
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct TestFrontMatter {
        title: String,
        #[serde(default)]
        enabled: bool,
    }

    #[test]
    fn test_split_frontmatter_with_frontmatter() {
        let content = "---\ntitle: Test\n---\nBody content";
        let parts = split_frontmatter(content).unwrap();
        assert_eq!(parts, Some(("title: Test\n", "Body content")));
    }

    #[test]
    fn test_split_frontmatter_without_frontmatter() {
        let content = "Just body content";
        assert_eq!(split_frontmatter(content).unwrap(), None);
    }

    #[test]
    fn test_split_frontmatter_dashes_without_newline_is_body() {
        assert_eq!(split_frontmatter("---").unwrap(), None);
        assert_eq!(split_frontmatter("----\nx\n---\n").unwrap(), None);
        assert_eq!(split_frontmatter(" ---\na: 1\n---\n").unwrap(), None);
    }

    #[test]
    fn test_split_frontmatter_unterminated() {
        let err = split_frontmatter("---\nunterminated").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_split_frontmatter_crlf() {
        let content = "---\r\na: 1\r\n---\r\nBODY\r\n";
        let parts = split_frontmatter(content).unwrap();
        assert_eq!(parts, Some(("a: 1\r\n", "BODY\r\n")));
    }

    #[test]
    fn test_split_frontmatter_mixed_newlines_is_malformed() {
        let err = split_frontmatter("---\r\na: 1\n---\nBODY").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_split_frontmatter_keeps_later_delimiters_in_body() {
        let content = "---\na: 1\n---\nfirst\n---\nsecond\n";
        let (_, body) = split_frontmatter(content).unwrap().unwrap();
        assert_eq!(body, "first\n---\nsecond\n");
    }

    #[test]
    fn test_split_frontmatter_empty_block() {
        let parts = split_frontmatter("---\n---\nBODY").unwrap();
        assert_eq!(parts, Some(("", "BODY")));
    }

    #[test]
    fn test_split_without_frontmatter_returns_input() {
        let inputs = [
            "",
            "plain text",
            "# heading\n---\nnot frontmatter\n---\n",
            "\n---\na: 1\n---\n",
            "tar -xvf archive.tar\r\n",
        ];
        for input in inputs {
            let parsed = split(input);
            assert!(parsed.is_ok(), "unexpected error for {input:?}");
            assert!(parsed.frontmatter.is_empty());
            assert_eq!(parsed.body, input);
            assert_eq!(parsed.body.as_ptr(), input.as_ptr());
        }
    }

    #[test]
    fn test_split_decodes_indented_field() {
        let parsed = split("---\n a: 1\n---\nBODY");
        assert!(parsed.is_ok());
        assert_eq!(
            parsed.frontmatter.get("a").and_then(serde_yaml::Value::as_i64),
            Some(1)
        );
        assert_eq!(parsed.body, "BODY");
    }

    #[test]
    fn test_split_decodes_crlf_document() {
        let parsed = split("---\r\nsyntax: sh\r\ntags: [shell]\r\n---\r\necho hi\r\n");
        assert!(parsed.is_ok());
        assert_eq!(parsed.frontmatter.syntax.as_deref(), Some("sh"));
        assert_eq!(parsed.frontmatter.tags, vec!["shell".to_string()]);
        assert_eq!(parsed.body, "echo hi\r\n");
    }

    #[test]
    fn test_split_unterminated_falls_back_to_input() {
        let input = "---\nunterminated";
        let parsed = split(input);
        assert!(parsed.error.as_ref().is_some_and(FrontmatterError::is_malformed));
        assert!(parsed.frontmatter.is_empty());
        assert_eq!(parsed.body, input);
    }

    #[test]
    fn test_split_invalid_yaml_falls_back_to_input() {
        let input = "---\ntags: [unclosed\n---\nBODY";
        let parsed = split(input);
        assert!(parsed.error.as_ref().is_some_and(FrontmatterError::is_decode));
        assert!(parsed.frontmatter.is_empty());
        assert_eq!(parsed.body, input);
    }

    #[test]
    fn test_split_empty_block_is_default() {
        let parsed = split("---\n\n---\nBODY");
        assert!(parsed.is_ok());
        assert!(parsed.frontmatter.is_empty());
        assert_eq!(parsed.body, "BODY");
    }

    #[test]
    fn test_parse_frontmatter_typed() {
        let content = "---\ntitle: Hello\nenabled: true\n---\nBody here";
        let parsed: ParsedContent<TestFrontMatter> = parse_frontmatter(content);
        let (frontmatter, body) = parsed.into_result().unwrap();
        assert_eq!(
            frontmatter,
            TestFrontMatter {
                title: "Hello".to_string(),
                enabled: true
            }
        );
        assert_eq!(body, "Body here");
    }

    #[test]
    fn test_parse_frontmatter_missing_required_field() {
        let content = "---\nenabled: true\n---\nBody";
        let parsed: ParsedContent<TestFrontMatter> = parse_frontmatter(content);
        assert_eq!(parsed.frontmatter, TestFrontMatter::default());
        assert_eq!(parsed.body, content);
        let err = parsed.into_result().unwrap_err();
        assert!(err.to_string().starts_with("failed to unmarshal frontmatter"));
    }

    #[test]
    fn test_decoder_sees_only_metadata_text() {
        let decoder = RecordingDecoder::default();
        let parsed = parse_frontmatter_with("---\nkey=value\n---\nBODY", &decoder);
        assert!(parsed.is_ok());
        assert_eq!(parsed.frontmatter, vec!["key=value\n".to_string()]);
        assert_eq!(parsed.body, "BODY");
    }

    #[test]
    fn test_decoder_not_called_without_frontmatter() {
        let parsed = parse_frontmatter_with("no metadata", &FailingDecoder);
        assert!(parsed.is_ok());
        assert_eq!(parsed.body, "no metadata");
    }

    #[test]
    fn test_decoder_not_called_when_malformed() {
        let parsed = parse_frontmatter_with("---\nnever closed", &FailingDecoder);
        assert!(parsed.error.as_ref().is_some_and(FrontmatterError::is_malformed));
    }

    #[test]
    fn test_decoder_failure_is_wrapped() {
        let input = "---\n: : :\n---\nBODY";
        let parsed = parse_frontmatter_with(input, &FailingDecoder);
        let err = parsed.error.expect("decode error expected");
        assert!(err.is_decode());
        assert!(err.to_string().contains("stub decoder rejected"));
        assert_eq!(parsed.body, input);
    }
}
