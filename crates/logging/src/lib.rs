#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` carries the two output channels used by `escp`:
//!
//! - operator diagnostics ([`Message`]) that are always written to the
//!   terminal, rendered as `escp error: ... (code N)`, `escp warning: ...`,
//!   or `escp info: ...`;
//! - structured [`tracing`] events routed through the subscriber installed by
//!   [`init_tracing`], filtered by the requested [`Verbosity`].
//!
//! # Design
//!
//! [`MessageSink`] wraps any [`std::io::Write`] implementor and renders
//! messages one per line. The subsystem macros
//! ([`trace_filter!`], [`trace_flist!`], [`trace_copy!`], [`trace_config!`])
//! attach stable targets (`escp::filter`, `escp::flist`, ...) so operators can
//! narrow output with the `ESCP_LOG` environment variable.
//!
//! # Examples
//!
//! ```
//! use logging::{Message, MessageSink};
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.write(&Message::warning("pattern '[' is not a valid glob")).unwrap();
//! sink.write(&Message::error(3, "failed to read directory 'src'")).unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! let mut lines = output.lines();
//! assert_eq!(lines.next(), Some("escp warning: pattern '[' is not a valid glob"));
//! assert_eq!(lines.next(), Some("escp error: failed to read directory 'src' (code 3)"));
//! ```

mod init;
mod message;
mod sink;
mod tracing_macros;

pub use init::{LOG_ENV, Verbosity, init_tracing};
pub use message::{Message, PROGRAM_NAME, Severity};
pub use sink::MessageSink;

#[doc(hidden)]
pub use tracing;
