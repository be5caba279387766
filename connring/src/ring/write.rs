// SPDX-License-Identifier: Apache-2.0

//! Writer-side operations. These move the write cursor, and move the read cursor
//! only when a write overflows.

use std::cmp::min;
use all_asserts::debug_assert_le;
use super::{ByteRing, Oversize};

impl ByteRing {
	/// Writes `len` copies of `value`, capped at the storage size, returning the
	/// number of bytes written. Writing past the free space evicts the oldest
	/// unread bytes, leaving the ring full.
	pub fn fill(&mut self, value: u8, len: usize) -> usize {
		let count = min(len, self.allocated_size());
		let overflow = count > self.bytes_free();

		self.write_segments(count, |seg, _| seg.fill(value));

		if overflow {
			self.evict_to_full();
		}
		count
	}

	/// Copies `data` into the ring, returning the new write position. Writing past
	/// the free space evicts the oldest unread bytes, leaving the ring full.
	///
	/// Data longer than the whole storage region is handled according to the
	/// ring's [`Oversize`] mode. By default every byte is written, so only the
	/// last `capacity` bytes of `data` remain readable.
	pub fn copy_in(&mut self, data: &[u8]) -> usize {
		let size = self.allocated_size();
		let overflow = data.len() > self.bytes_free();

		let data = if data.len() > size {
			match self.oversize {
				Oversize::Wrap => {
					// Bytes before the last region's worth would be overwritten
					// within this same call; skip past them instead.
					let skip = data.len() - size;
					self.head = self.advance_pos(self.head, skip);
					&data[skip..]
				}
				Oversize::Cap => &data[..size],
			}
		} else {
			data
		};

		self.write_segments(data.len(), |seg, off|
			seg.copy_from_slice(&data[off..off + seg.len()])
		);

		if overflow {
			self.evict_to_full();
		}
		self.head
	}

	/// Writes `count` bytes at the write cursor, passing each contiguous segment of
	/// storage to `write` along with the number of bytes written before it. There
	/// are at most two segments: up to the region end, then from its start.
	fn write_segments(&mut self, count: usize, mut write: impl FnMut(&mut [u8], usize)) {
		let size = self.allocated_size();
		debug_assert_le!(count, size);

		let mut written = 0;
		while written < count {
			let head = self.head;
			let n = min(size - head, count - written);
			write(&mut self.buf[head..head + n], written);
			written += n;
			self.head = (head + n) % size;
		}
	}

	/// Moves the read cursor one past the write cursor after an overflowing write,
	/// dropping the evicted bytes.
	fn evict_to_full(&mut self) {
		self.tail = self.next_pos(self.head);
		debug_assert!(self.is_full(), "ring should be full after an overflowing write");
	}
}
