// SPDX-License-Identifier: Apache-2.0

//! Reader-side operations. These only ever move the read cursor.

use std::cmp::min;
use all_asserts::debug_assert_le;
use crate::error::{Error, Result};
use crate::error::OperationKind::{Consume, CopyOut};
use super::ByteRing;

impl ByteRing {
	/// Returns the unread bytes as two slices, in order. The second slice is empty
	/// unless the unread bytes wrap around the end of the storage region.
	pub fn as_slices(&self) -> (&[u8], &[u8]) {
		let Self { buf, head, tail, .. } = self;
		if head >= tail {
			(&buf[*tail..*head], &[])
		} else {
			(&buf[*tail..], &buf[..*head])
		}
	}

	/// Finds the first `value` in the unread bytes, starting `offset` bytes past
	/// the read cursor. Returns its offset from the read cursor, or
	/// [`bytes_used`](Self::bytes_used) if not found.
	pub fn find_byte(&self, value: u8, mut offset: usize) -> usize {
		let used = self.bytes_used();
		let size = self.allocated_size();

		// At most two passes: up to the region end, then from its start.
		while offset < used {
			let start = (self.tail + offset) % size;
			let n = min(size - start, used - offset);
			if let Some(pos) = self.buf[start..start + n].iter().position(|&b| b == value) {
				return offset + pos
			}
			offset += n;
		}
		used
	}

	/// Copies exactly `target.len()` bytes out of the ring, returning the new read
	/// position.
	///
	/// # Errors
	///
	/// Returns an [`Underflow`](crate::ErrorKind::Underflow) error if fewer bytes
	/// are buffered. Nothing is copied and the ring is left unchanged.
	pub fn copy_out(&mut self, target: &mut [u8]) -> Result<usize> {
		let count = target.len();
		let used = self.bytes_used();
		if count > used {
			return Err(Error::underflow(CopyOut))
		}

		let size = self.allocated_size();
		let mut read = 0;
		while read < count {
			let tail = self.tail;
			let n = min(size - tail, count - read);
			target[read..read + n].copy_from_slice(&self.buf[tail..tail + n]);
			read += n;
			self.tail = (tail + n) % size;
		}

		debug_assert_eq!(count + self.bytes_used(), used);
		Ok(self.tail)
	}

	/// Discards `count` unread bytes without copying them, returning the new read
	/// position. This pairs with [`as_slices`](Self::as_slices) and
	/// [`storage`](Self::storage) for reading in place.
	///
	/// # Errors
	///
	/// Returns an [`Underflow`](crate::ErrorKind::Underflow) error if fewer bytes
	/// are buffered, leaving the ring unchanged.
	pub fn consume(&mut self, count: usize) -> Result<usize> {
		if count > self.bytes_used() {
			return Err(Error::underflow(Consume))
		}

		self.skip(count);
		Ok(self.tail)
	}

	/// Advances the read cursor by `count`, which must not exceed the number of
	/// unread bytes.
	pub(crate) fn skip(&mut self, count: usize) {
		let used = self.bytes_used();
		debug_assert_le!(count, used);
		self.tail = self.advance_pos(self.tail, count);
		debug_assert_eq!(count + self.bytes_used(), used);
	}
}
