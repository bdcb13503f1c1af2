use log::trace;

use crate::error::Result;

use super::ObjectStream;

/// Groups consecutive non-empty lines into one block per paragraph.
///
/// Every line of a block is followed by `\n`. Runs of empty lines are skipped,
/// and the last paragraph is delivered even without a trailing empty line.
pub struct ParagraphStream<S> {
    lines: S,
}

impl<S> ParagraphStream<S>
where
    S: ObjectStream<Item = String>,
{
    pub fn new(lines: S) -> Self {
        ParagraphStream { lines }
    }

    pub fn into_inner(self) -> S {
        self.lines
    }
}

impl<S> ObjectStream for ParagraphStream<S>
where
    S: ObjectStream<Item = String>,
{
    type Item = String;

    fn read(&mut self) -> Result<Option<String>> {
        let mut paragraph = String::new();

        loop {
            match self.lines.read()? {
                Some(line) if line.is_empty() => {
                    if !paragraph.is_empty() {
                        break;
                    }
                }
                Some(line) => {
                    paragraph.push_str(&line);
                    paragraph.push('\n');
                }
                None => {
                    if paragraph.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
            }
        }

        trace!("Read paragraph of {} lines", paragraph.lines().count());
        Ok(Some(paragraph))
    }

    fn reset(&mut self) -> Result<()> {
        self.lines.reset()
    }

    fn close(&mut self) -> Result<()> {
        self.lines.close()
    }
}
