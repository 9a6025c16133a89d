#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `transport` moves the filtered copy targets to their destination by running
//! the system `scp` (and `ssh` for directory preparation). It does not speak
//! any transfer protocol itself.
//!
//! # Design
//!
//! - [`Destination`] parses `[user@]host:path` operands (IPv6 literals in
//!   brackets) and local paths.
//! - [`copy_targets`] first creates the parent directories of every relative
//!   path under the destination, then runs one `scp -r` per target and
//!   records the outcome in a [`TransferReport`]. A failed item does not stop
//!   the batch.
//! - [`CopyOptions`] selects the programs (overridable through
//!   [`SCP_PROGRAM_ENV`] and [`SSH_PROGRAM_ENV`]) and an optional port.
//!
//! # Errors
//!
//! [`TransferError`] covers failures that stop the batch: a program that
//! cannot be started or destination directories that cannot be created.
//! [`DestinationParseError`] reports malformed operands.
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//! use transport::Destination;
//!
//! let dest: Destination = "deploy@[2001:db8::1]:/srv/app".parse().unwrap();
//! assert_eq!(dest.ssh_target().as_deref(), Some("deploy@2001:db8::1"));
//! assert_eq!(
//!     dest.join(Path::new("static/app.css")),
//!     "deploy@[2001:db8::1]:/srv/app/static/app.css"
//! );
//! ```

mod copy;
mod destination;
mod error;
mod program;
mod quote;
mod report;

pub use copy::{CopyOptions, copy_targets};
pub use destination::{Destination, DestinationParseError};
pub use error::TransferError;
pub use program::{SCP_PROGRAM_ENV, SSH_PROGRAM_ENV, describe_missing_program, program_from_env};
pub use quote::{quote_remote_path, shell_quote};
pub use report::{ItemOutcome, ItemReport, TransferReport};
