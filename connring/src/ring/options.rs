// SPDX-License-Identifier: Apache-2.0

use crate::DEFAULT_CAPACITY;

/// Options for creating a [`ByteRing`](super::ByteRing).
///
/// # Capacity
///
/// The maximum number of unread bytes the ring holds at once. The storage region
/// is one byte larger than this. Defaults to [`DEFAULT_CAPACITY`]. A capacity of
/// zero is allowed; such a ring is always both empty and full.
///
/// # Oversize
///
/// How [`ByteRing::copy_in`](super::ByteRing::copy_in) handles a single write
/// longer than the whole storage region. See [`Oversize`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct RingOptions {
	pub capacity: usize,
	pub oversize: Oversize,
}

/// The handling of writes longer than the storage region.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Oversize {
	/// Write every byte, wrapping around the region as many times as needed. Only
	/// the last `capacity` bytes of the write are kept, and the write cursor ends
	/// where it would if the bytes had been written one at a time.
	#[default]
	Wrap,
	/// Write only the first `capacity + 1` bytes, dropping the rest, the same
	/// limit [`ByteRing::fill`](super::ByteRing::fill) applies.
	Cap,
}

impl Oversize {
	/// Returns `true` if the mode is [`Wrap`](Self::Wrap).
	pub fn is_wrap(&self) -> bool {
		matches!(self, Self::Wrap)
	}

	/// Returns `true` if the mode is [`Cap`](Self::Cap).
	pub fn is_cap(&self) -> bool {
		matches!(self, Self::Cap)
	}
}

impl Default for RingOptions {
	fn default() -> Self { Self::new() }
}

impl RingOptions {
	/// Creates a new set of ring options.
	pub const fn new() -> Self {
		Self {
			capacity: DEFAULT_CAPACITY,
			oversize: Oversize::Wrap,
		}
	}

	/// Returns the ring capacity.
	#[inline]
	pub const fn capacity(&self) -> usize { self.capacity }

	/// Returns the oversize write mode.
	#[inline]
	pub const fn oversize(&self) -> Oversize { self.oversize }

	/// Sets the ring capacity.
	#[inline]
	pub fn set_capacity(mut self, value: usize) -> Self {
		self.capacity = value;
		self
	}

	/// Sets the oversize write mode.
	#[inline]
	pub fn set_oversize(mut self, value: Oversize) -> Self {
		self.oversize = value;
		self
	}
}
