// SPDX-License-Identifier: Apache-2.0

mod options;
mod read;
mod write;

pub use options::*;

use std::{fmt, result};
use std::fmt::{Debug, Formatter};
use all_asserts::debug_assert_lt;
use log::{debug, error};
use crate::error::{AllocError, Error, Result};

/// A fixed-capacity ring of bytes, evicting the oldest unread bytes when written
/// past its capacity.
///
/// The storage region is allocated once, zeroed, when the ring is created, and is
/// freed when the ring is dropped. It's `capacity + 1` bytes long: one slot is
/// kept free so that a full ring (write cursor one slot behind the read cursor)
/// can be told apart from an empty one (cursors equal).
///
/// Writer operations are in [`fill`](Self::fill) and [`copy_in`](Self::copy_in).
/// Reader operations are [`copy_out`](Self::copy_out), [`consume`](Self::consume),
/// [`find_byte`](Self::find_byte), [`as_slices`](Self::as_slices) and
/// [`reset`](Self::reset).
#[derive(Clone)]
pub struct ByteRing {
	/// The storage region, `capacity + 1` bytes long.
	buf: Box<[u8]>,
	/// The index where the next byte is written.
	head: usize,
	/// The index where the next byte is read.
	tail: usize,
	oversize: Oversize,
}

impl TryFrom<RingOptions> for ByteRing {
	type Error = Error;

	fn try_from(options: RingOptions) -> Result<Self> {
		Self::with_options(options)
	}
}

impl Debug for ByteRing {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("ByteRing")
			.field("capacity", &self.capacity())
			.field("used", &self.bytes_used())
			.field("read", &self.tail)
			.field("write", &self.head)
			.field("oversize", &self.oversize)
			.finish_non_exhaustive()
	}
}

impl ByteRing {
	/// Creates a new, empty ring holding up to `capacity` bytes, with default
	/// options otherwise.
	///
	/// # Errors
	///
	/// Returns an [`Alloc`](crate::ErrorKind::Alloc) error if the storage region could
	/// not be allocated. Nothing stays allocated in that case.
	pub fn new(capacity: usize) -> Result<Self> {
		Self::with_options(RingOptions::new().set_capacity(capacity))
	}

	/// Creates a new, empty ring from `options`.
	pub fn with_options(options: RingOptions) -> Result<Self> {
		let RingOptions { capacity, oversize } = options;
		let buf = alloc_zeroed(capacity).map_err(|err| {
			debug!("failed to create ring with capacity {capacity}: {err}");
			Error::alloc(err)
		})?;

		debug!("created ring with capacity {capacity}");
		Ok(Self {
			buf,
			head: 0,
			tail: 0,
			oversize,
		})
	}

	/// Drops the ring held in `slot`, leaving it empty. Releasing an empty slot
	/// is a caller bug; it's logged and otherwise ignored.
	pub fn release(slot: &mut Option<Self>) {
		if slot.take().is_none() {
			error!("attempted to release a ring that was already released");
		}
	}

	/// Drops all unread bytes by moving the read cursor to the write cursor. The
	/// storage itself is left as is.
	pub fn reset(&mut self) {
		self.tail = self.head;
	}

	/// Returns the size of the storage region, one more than the capacity.
	#[inline]
	pub fn allocated_size(&self) -> usize { self.buf.len() }

	/// Returns the maximum number of bytes the ring can hold.
	#[inline]
	pub fn capacity(&self) -> usize { self.allocated_size() - 1 }

	/// Returns the oversize write mode the ring was created with.
	#[inline]
	pub fn oversize(&self) -> Oversize { self.oversize }

	/// Returns the number of bytes that can be written before the oldest unread
	/// bytes are evicted.
	pub fn bytes_free(&self) -> usize {
		let Self { head, tail, .. } = *self;
		if head >= tail {
			self.capacity() - (head - tail)
		} else {
			tail - head - 1
		}
	}

	/// Returns the number of unread bytes.
	#[inline]
	pub fn bytes_used(&self) -> usize { self.capacity() - self.bytes_free() }

	/// Returns `true` if no more bytes can be written without evicting.
	#[inline]
	pub fn is_full(&self) -> bool { self.bytes_free() == 0 }

	/// Returns `true` if the ring holds no unread bytes.
	#[inline]
	pub fn is_empty(&self) -> bool { self.bytes_free() == self.capacity() }

	/// Returns the index of the read cursor in [`storage`](Self::storage).
	#[inline]
	pub fn read_position(&self) -> usize { self.tail }

	/// Returns the index of the write cursor in [`storage`](Self::storage).
	#[inline]
	pub fn write_position(&self) -> usize { self.head }

	/// Returns the whole storage region, including bytes that aren't unread data.
	/// Combined with the cursor positions, this allows reading contiguous runs in
	/// place.
	#[inline]
	pub fn storage(&self) -> &[u8] { &self.buf }

	/// Returns the position one past `pos`, wrapping to the region start.
	fn next_pos(&self, pos: usize) -> usize {
		debug_assert_lt!(pos, self.allocated_size());
		(pos + 1) % self.allocated_size()
	}

	/// Returns the position `count` bytes past `pos`, wrapping to the region start
	/// as many times as needed.
	fn advance_pos(&self, pos: usize, count: usize) -> usize {
		debug_assert_lt!(pos, self.allocated_size());
		let size = self.allocated_size();
		(pos + count % size) % size
	}
}

/// Allocates a zeroed region for `capacity` bytes plus the sentinel slot.
fn alloc_zeroed(capacity: usize) -> result::Result<Box<[u8]>, AllocError> {
	let size = capacity.checked_add(1)
					   .ok_or(AllocError::CapacityOverflow(capacity))?;
	let mut buf = Vec::new();
	buf.try_reserve_exact(size)
	   .map_err(|source| AllocError::Reserve { size, source })?;
	buf.resize(size, 0);
	Ok(buf.into_boxed_slice())
}
