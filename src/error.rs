use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures while splitting frontmatter off a document.
///
/// Both variants are recoverable: the splitter always hands back the whole
/// input as a fallback body alongside the error.
#[derive(Error, Debug)]
pub enum FrontmatterError {
    /// The document opens with a delimiter but never closes it.
    #[error("failed to delimit frontmatter")]
    Malformed,

    /// The block is delimited but its contents did not decode.
    #[error("failed to unmarshal frontmatter: {source}")]
    Decode {
        #[source]
        source: BoxError,
    },
}

impl FrontmatterError {
    pub fn decode<E>(source: E) -> Self
    where
        E: Into<BoxError>,
    {
        FrontmatterError::Decode {
            source: source.into(),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, FrontmatterError::Malformed)
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FrontmatterError::Decode { .. })
    }
}
