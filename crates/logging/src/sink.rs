use std::borrow::Borrow;
use std::io::{self, Write};

use crate::Message;

/// Renders [`Message`] values into an [`io::Write`] target, one per line.
///
/// # Examples
///
/// ```
/// use logging::{Message, MessageSink};
///
/// let mut sink = MessageSink::new(Vec::new());
/// sink.write(&Message::info("ready"))?;
///
/// assert_eq!(sink.into_inner(), b"escp info: ready\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct MessageSink<W> {
    writer: W,
}

impl<W> MessageSink<W> {
    /// Wraps `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Mutably borrows the underlying writer.
    ///
    /// Callers use this for output that is not a diagnostic (listings,
    /// usage lines, captured program output).
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MessageSink<W> {
    /// Writes a single message followed by a newline.
    pub fn write(&mut self, message: &Message) -> io::Result<()> {
        message.render_line_to_writer(&mut self.writer)
    }

    /// Writes each message in order, stopping at the first failure.
    pub fn write_all<I, M>(&mut self, messages: I) -> io::Result<()>
    where
        I: IntoIterator<Item = M>,
        M: Borrow<Message>,
    {
        for message in messages {
            self.write(message.borrow())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_message_gets_its_own_line() {
        let mut sink = MessageSink::new(Vec::new());
        sink.write(&Message::warning("skipped pattern"))
            .expect("write succeeds");
        sink.write(&Message::error(23, "partial"))
            .expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("escp warning: skipped pattern"));
        assert_eq!(lines.next(), Some("escp error: partial (code 23)"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn write_all_accepts_borrowed_messages() {
        let messages = [Message::warning("one"), Message::warning("two")];
        let mut sink = MessageSink::new(Vec::new());
        sink.write_all(&messages).expect("batch write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output, "escp warning: one\nescp warning: two\n");
    }
}
