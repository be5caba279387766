// SPDX-License-Identifier: Apache-2.0

//! Stages a byte stream through a small ring the way a connection layer would:
//! receive whatever fits, then hand complete lines to the protocol above.

use std::io::{self, Cursor, Read, Write};
use connring::ByteRing;
use pretty_assertions::assert_eq;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Lines of printable ASCII, each no longer than the ring capacity.
#[derive(Clone, Debug)]
struct Lines(Vec<String>);

const CAPACITY: usize = 24;

impl Arbitrary for Lines {
	fn arbitrary(g: &mut Gen) -> Self {
		let count = usize::arbitrary(g) % 16;
		let lines = (0..count).map(|_| {
			let len = usize::arbitrary(g) % CAPACITY;
			(0..len).map(|_| (b' ' + u8::arbitrary(g) % 95) as char).collect()
		}).collect();
		Self(lines)
	}

	fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
		Box::new(self.0.shrink().map(Self))
	}
}

/// Receives into `ring` from `socket` without overflowing, in reads of at most
/// `chunk` bytes. Returns the number of bytes received.
fn receive(ring: &mut ByteRing, socket: &mut impl Read, chunk: usize) -> io::Result<usize> {
	let mut buf = vec![0; chunk.min(ring.bytes_free())];
	let n = socket.read(&mut buf)?;
	ring.copy_in(&buf[..n]);
	Ok(n)
}

/// Takes the next complete line out of `ring`, without its terminator.
fn take_line(ring: &mut ByteRing) -> Option<Vec<u8>> {
	let end = ring.find_byte(b'\n', 0);
	if end == ring.bytes_used() {
		return None
	}

	let mut line = vec![0; end];
	ring.copy_out(&mut line).ok()?;
	ring.consume(1).ok()?;
	Some(line)
}

fn stage(payload: &[u8], chunk: usize) -> Vec<String> {
	let mut ring = ByteRing::new(CAPACITY).unwrap();
	let mut socket = Cursor::new(payload);
	let mut lines = Vec::new();

	loop {
		let received = receive(&mut ring, &mut socket, chunk).unwrap();
		while let Some(line) = take_line(&mut ring) {
			lines.push(String::from_utf8(line).unwrap());
		}
		if received == 0 && ring.bytes_free() > 0 {
			break
		}
	}
	lines
}

#[quickcheck]
fn lines_survive_staging(Lines(lines): Lines, chunk: u8) {
	let payload: String = lines.iter().map(|line| format!("{line}\n")).collect();
	let chunk = chunk as usize % CAPACITY + 1;
	assert_eq!(stage(payload.as_bytes(), chunk), lines);
}

#[test]
fn io_copy_through_ring() {
	let mut ring = ByteRing::new(64).unwrap();
	let request = b"HEAD /index.html HTTP/1.1\r\nHost: example.org\r\n\r\n";
	io::copy(&mut &request[..], &mut ring).unwrap();
	ring.flush().unwrap();

	let mut forwarded = Vec::new();
	io::copy(&mut ring, &mut forwarded).unwrap();
	assert_eq!(forwarded, request);
	assert!(ring.is_empty());
}
