use std::io::Cursor;

use anyhow::Result;

use conllx_pos::{
    error::StreamError,
    stream::{CollectionStream, ObjectStream, ParagraphStream, PlainTextByLineStream},
};

fn read_all<S: ObjectStream>(stream: &mut S) -> Result<Vec<S::Item>> {
    Ok(stream.iter().collect::<Result<Vec<_>, _>>()?)
}

#[test]
fn test_lines_without_terminators() -> Result<()> {
    let mut lines = PlainTextByLineStream::from_bytes("a\nb\r\n\nc".as_bytes());

    assert_eq!(read_all(&mut lines)?, vec!["a", "b", "", "c"]);
    Ok(())
}

#[test]
fn test_utf8_bom_is_removed() -> Result<()> {
    let mut lines = PlainTextByLineStream::from_bytes(b"\xEF\xBB\xBFfirst\nsecond\n".to_vec());

    assert_eq!(read_all(&mut lines)?, vec!["first", "second"]);

    lines.reset()?;
    assert_eq!(lines.read()?.as_deref(), Some("first"));
    Ok(())
}

#[test]
fn test_latin1_input() -> Result<()> {
    let mut lines = PlainTextByLineStream::from_bytes(b"1\tpi\xF1ata\n".to_vec())
        .with_encoding(encoding_rs::WINDOWS_1252);

    assert_eq!(lines.read()?.as_deref(), Some("1\tpiñata"));
    Ok(())
}

#[test]
fn test_shift_jis_input() -> Result<()> {
    let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode("1\t東京\t東京\t名詞\t名詞\n");
    let mut lines =
        PlainTextByLineStream::from_bytes(bytes.into_owned()).with_encoding(encoding_rs::SHIFT_JIS);

    assert_eq!(lines.read()?.as_deref(), Some("1\t東京\t東京\t名詞\t名詞"));
    assert_eq!(lines.encoding(), encoding_rs::SHIFT_JIS);
    Ok(())
}

#[test]
fn test_sequential_reader_cannot_reset() {
    let mut lines = PlainTextByLineStream::new(Cursor::new(b"a\n".to_vec()));

    assert!(matches!(lines.reset(), Err(StreamError::Unsupported(_))));
}

#[test]
fn test_closed_line_stream() -> Result<()> {
    let mut lines = PlainTextByLineStream::from_bytes("a\n".as_bytes());

    lines.close()?;
    lines.close()?;

    assert!(matches!(lines.read(), Err(StreamError::Closed)));
    assert!(matches!(lines.reset(), Err(StreamError::Closed)));
    Ok(())
}

#[test]
fn test_open_missing_file() {
    let result = PlainTextByLineStream::open("./tests/resources/missing.conllx");

    assert!(matches!(result, Err(StreamError::Io(_))));
}

#[test]
fn test_paragraphs() -> Result<()> {
    let lines = CollectionStream::new(
        ["", "", "a", "b", "", "", "", "c", "  ", "", "d"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    let mut paragraphs = ParagraphStream::new(lines);

    assert_eq!(read_all(&mut paragraphs)?, vec!["a\nb\n", "c\n  \n", "d\n"]);
    assert_eq!(paragraphs.read()?, None);
    Ok(())
}

#[test]
fn test_paragraph_reset_delegates() -> Result<()> {
    let mut paragraphs = ParagraphStream::new(PlainTextByLineStream::from_bytes(
        "a\n\nb\n".as_bytes(),
    ));

    let first = read_all(&mut paragraphs)?;
    paragraphs.reset()?;
    let second = read_all(&mut paragraphs)?;

    assert_eq!(first, vec!["a\n", "b\n"]);
    assert_eq!(first, second);

    paragraphs.close()?;
    assert!(matches!(
        paragraphs.into_inner().read(),
        Err(StreamError::Closed)
    ));
    Ok(())
}

#[test]
fn test_collection_stream_reset() -> Result<()> {
    let mut stream = CollectionStream::new(vec![1, 2]);

    assert_eq!(read_all(&mut stream)?, vec![1, 2]);
    assert_eq!(stream.read()?, None);

    stream.reset()?;
    assert_eq!(stream.read()?, Some(1));
    Ok(())
}
