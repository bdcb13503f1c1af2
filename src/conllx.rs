// CoNLL-X (CoNLL 2006 shared task) 形式
//
// 1 行 1 語，タブ区切りで
//   ID, FORM, LEMMA, CPOSTAG, POSTAG, ... (最大 10 列)
// 空行で文が区切られる．FORM と POSTAG のみを取り出す

use std::path::Path;

use log::debug;

use crate::{
    error::{Result, StreamError},
    pos_sample::PosSample,
    stream::{ObjectStream, ParagraphStream, PlainTextByLineStream},
};

pub const MIN_NUMBER_OF_FIELDS: usize = 5;

const FORM: usize = 1;
const POSTAG: usize = 4;

/// Reads one [`PosSample`] per sentence from a stream of CoNLL-X paragraphs.
pub struct ConllXPosSampleStream<P> {
    paragraphs: P,
}

impl<P> ConllXPosSampleStream<P>
where
    P: ObjectStream<Item = String>,
{
    pub fn new(paragraphs: P) -> Self {
        ConllXPosSampleStream { paragraphs }
    }
}

impl<L> ConllXPosSampleStream<ParagraphStream<L>>
where
    L: ObjectStream<Item = String>,
{
    pub fn from_lines(lines: L) -> Self {
        Self::new(ParagraphStream::new(lines))
    }
}

impl ConllXPosSampleStream<ParagraphStream<PlainTextByLineStream>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_lines(PlainTextByLineStream::open(path)?))
    }
}

impl<P> ObjectStream for ConllXPosSampleStream<P>
where
    P: ObjectStream<Item = String>,
{
    type Item = PosSample;

    fn read(&mut self) -> Result<Option<PosSample>> {
        while let Some(paragraph) = self.paragraphs.read()? {
            let (tokens, tags) = parse_paragraph(&paragraph)?;

            // 空の段落は読み飛ばす
            if tokens.is_empty() {
                debug!("Skipping empty paragraph");
                continue;
            }

            return PosSample::new(tokens, tags).map(Some);
        }

        Ok(None)
    }

    fn reset(&mut self) -> Result<()> {
        self.paragraphs.reset()
    }

    fn close(&mut self) -> Result<()> {
        self.paragraphs.close()
    }
}

fn parse_paragraph(paragraph: &str) -> Result<(Vec<String>, Vec<String>)> {
    let mut tokens = Vec::new();
    let mut tags = Vec::new();

    for line in paragraph.lines() {
        let fields = split_fields(line);

        if fields.len() < MIN_NUMBER_OF_FIELDS {
            return Err(StreamError::Format(format!(
                "Every non-empty line must have at least {} fields! {:?}",
                MIN_NUMBER_OF_FIELDS, line
            )));
        }

        tokens.push(fields[FORM].to_string());
        tags.push(fields[POSTAG].to_string());
    }

    Ok((tokens, tags))
}

// 末尾の空の列は数えない
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split('\t').collect();
    while fields.last() == Some(&"") {
        fields.pop();
    }
    fields
}
