// SPDX-License-Identifier: Apache-2.0

use std::cmp::min;
use std::io;
use std::io::{BufRead, Read, Write};
use crate::{ByteRing, Oversize};

/// Reads up to `buf.len()` unread bytes. Returns `0` when the ring is empty, which
/// readers treat as end-of-stream; the ring itself has no end, so this just means
/// nothing has been written since the last read.
impl Read for ByteRing {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let count = min(buf.len(), self.bytes_used());
		self.copy_out(&mut buf[..count])?;
		Ok(count)
	}
}

/// Reads in place from the contiguous run at the read cursor.
impl BufRead for ByteRing {
	fn fill_buf(&mut self) -> io::Result<&[u8]> {
		Ok(self.as_slices().0)
	}

	fn consume(&mut self, amt: usize) {
		let count = min(amt, self.bytes_used());
		self.skip(count);
	}
}

/// Writes with the ring's overflow behavior: bytes past the free space evict the
/// oldest unread bytes. All of `buf` is accepted unless the ring was created with
/// [`Oversize::Cap`] and `buf` is longer than the storage region.
impl Write for ByteRing {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let accepted = match self.oversize() {
			Oversize::Wrap => buf.len(),
			Oversize::Cap => min(buf.len(), self.allocated_size()),
		};
		self.copy_in(buf);
		Ok(accepted)
	}

	fn flush(&mut self) -> io::Result<()> { Ok(()) }
}
