//! Concurrent integer summation over lines of text
//!
//! Lines come from memory, a file or any async reader. Each line is split on
//! whitespace, every token is parsed as a signed 64-bit integer (a leading
//! Unicode dash counts as a minus sign) and the values are added to a shared
//! [`ThreadSafeSum`](storage::ThreadSafeSum). Lines are spread over a pool of
//! tokio workers that stop cooperatively as soon as one of them reports a
//! failure to the [`StateProcessor`](streaming::StateProcessor).
//!
//! - [`domain`] - tokenizing and sign-normalized integer parsing
//! - [`storage`] - the atomic, parent-chainable sum
//! - [`io`] - line sources and line streams
//! - [`streaming`] - cancellation state and the worker pool
//! - [`engine`] - the [`Parser`](engine::Parser) and its builder
//! - [`app`] - CLI runner used by the `linesum` binary

pub mod app;
pub mod domain;
pub mod engine;
pub mod io;
pub mod prelude;
pub mod storage;
pub mod streaming;
