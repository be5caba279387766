// Copyright 2023 Strixpyrr
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! ## How it works
//!
//! A [`ByteRing`] stages bytes between IO events of a connection, such as data
//! received from a socket but not yet consumed by the protocol layer above it.
//! Its storage is allocated once, at creation, and never grows. Bytes are written
//! at a *write cursor* and read from a *read cursor*; both move forward through
//! the storage region and wrap back to its start after the last byte.
//!
//! ### Layout
//!
//! The region is one byte longer than the usable capacity. That extra slot always
//! stays unwritten from the reader's point of view: the ring is empty when both
//! cursors are equal, and full when the write cursor sits one slot behind the
//! read cursor. No separate length is stored.
//!
//! ### Overflow
//!
//! Writing more than the free space never fails. The write goes through, and the
//! oldest unread bytes are evicted to make room, leaving the ring full. Nothing
//! signals the eviction; callers that care compare [`ByteRing::bytes_free`] with
//! their write size beforehand. Reading, on the other hand, is all-or-nothing:
//! asking for more bytes than are buffered fails without touching the ring.
//!
//! ### Roles
//!
//! A ring has one writer and one reader. The writer calls [`ByteRing::fill`] and
//! [`ByteRing::copy_in`]; the reader calls [`ByteRing::copy_out`],
//! [`ByteRing::consume`], [`ByteRing::find_byte`], and [`ByteRing::reset`]. There
//! is no internal locking. Every mutating operation takes `&mut self`, so sharing
//! a ring across threads means wrapping it in a lock of the caller's choosing.

pub mod error;
mod ring;
mod std_io;
#[cfg(feature = "bytes")]
mod bytes_buf;

pub use error::{AllocError, Error, ErrorKind, OperationKind, Result};
pub use ring::*;

/// The default ring capacity, two TCP segments at the common Ethernet MSS of
/// 1460 bytes.
pub const DEFAULT_CAPACITY: usize = 2 * 1460;
