// 行単位のストリームを段階的に包んでサンプルを取り出す
//
// line stream -> paragraph stream -> sample stream
// の順に，各段が下の段を所有する

mod line_stream;
mod paragraph_stream;

pub use line_stream::PlainTextByLineStream;
pub use paragraph_stream::ParagraphStream;

use log::debug;

use crate::error::Result;

/// Pull-based stream of objects.
///
/// `read` returns `Ok(None)` once the stream is exhausted.
pub trait ObjectStream {
    type Item;

    fn read(&mut self) -> Result<Option<Self::Item>>;

    /// Rewinds to the first element. Sources that cannot rewind fail with
    /// [`StreamError::Unsupported`](crate::error::StreamError::Unsupported).
    fn reset(&mut self) -> Result<()>;

    /// Releases the underlying resources. Calling it more than once is a no-op.
    fn close(&mut self) -> Result<()>;

    fn iter(&mut self) -> StreamIter<'_, Self>
    where
        Self: Sized,
    {
        StreamIter {
            stream: self,
            failed: false,
        }
    }
}

/// Iterator over the remaining elements of an [`ObjectStream`].
///
/// Stops after the first error.
pub struct StreamIter<'a, S> {
    stream: &'a mut S,
    failed: bool,
}

impl<S: ObjectStream> Iterator for StreamIter<'_, S> {
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.stream.read() {
            Ok(item) => item.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// In-memory stream over already collected elements.
pub struct CollectionStream<T> {
    items: Vec<T>,
    position: usize,
}

impl<T> CollectionStream<T> {
    pub fn new(items: Vec<T>) -> Self {
        CollectionStream { items, position: 0 }
    }
}

impl<T: Clone> ObjectStream for CollectionStream<T> {
    type Item = T;

    fn read(&mut self) -> Result<Option<T>> {
        let item = self.items.get(self.position).cloned();
        if item.is_some() {
            self.position += 1;
        }
        Ok(item)
    }

    fn reset(&mut self) -> Result<()> {
        debug!("Rewinding collection stream of {} items", self.items.len());
        self.position = 0;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
