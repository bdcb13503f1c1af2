use std::fmt;

use serde::Serialize;

use crate::error::{Result, StreamError};

/// One part-of-speech annotated sentence.
///
/// `tokens[i]` is tagged with `tags[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PosSample {
    tokens: Vec<String>,
    tags: Vec<String>,
}

impl PosSample {
    pub fn new(tokens: Vec<String>, tags: Vec<String>) -> Result<Self> {
        if tokens.len() != tags.len() {
            return Err(StreamError::InvalidSample(format!(
                "{} tokens but {} tags",
                tokens.len(),
                tags.len()
            )));
        }

        Ok(PosSample { tokens, tags })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .iter()
            .zip(self.tags.iter())
            .map(|(token, tag)| (token.as_str(), tag.as_str()))
    }
}

// word_tag 形式: "John_NNP sees_VBZ Bill_NNP"
impl fmt::Display for PosSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (token, tag)) in self.pairs().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}_{}", token, tag)?;
        }
        Ok(())
    }
}
