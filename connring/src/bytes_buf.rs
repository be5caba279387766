// SPDX-License-Identifier: Apache-2.0

use all_asserts::assert_le;
use bytes::Buf;
use crate::ByteRing;

impl Buf for ByteRing {
	fn remaining(&self) -> usize { self.bytes_used() }

	fn chunk(&self) -> &[u8] { self.as_slices().0 }

	fn advance(&mut self, cnt: usize) {
		assert_le!(
			cnt,
			self.bytes_used(),
			"cannot advance past the unread bytes of the ring"
		);
		self.skip(cnt);
	}
}
