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

use std::collections::TryReserveError;
use std::error::Error as StdError;
use std::{fmt, io, result};
use std::fmt::Formatter;
use amplify_derive::Display;
use ErrorKind::{Alloc, Other, Underflow};

pub type ErrorBox = Box<dyn StdError + Send + Sync>;
pub type Result<T = ()> = result::Result<T, Error>;

/// A ring operation error: the operation that failed, why, and possibly an
/// underlying cause.
#[derive(Debug)]
pub struct Error {
	op: OperationKind,
	kind: ErrorKind,
	source: Option<ErrorBox>,
}

#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq)]
pub enum OperationKind {
	#[default]
	#[display("unknown operation")]
	Unknown,
	#[display("create ring")]
	Create,
	#[display("copy out of ring")]
	CopyOut,
	#[display("consume from ring")]
	Consume,
	#[display("{0}")]
	Other(&'static str)
}

#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum ErrorKind {
	/// The storage region couldn't be allocated.
	#[display("storage allocation failed")]
	Alloc,
	/// A read asked for more bytes than are buffered.
	#[display("not enough buffered data")]
	Underflow,
	#[display("{0}")]
	Other(&'static str),
}

/// A failure to allocate ring storage.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum AllocError {
	/// The capacity plus the sentinel slot doesn't fit in `usize`.
	#[error("capacity {0} overflows the addressable storage size")]
	CapacityOverflow(usize),
	/// The allocator couldn't reserve the storage region.
	#[error("failed to reserve {size} bytes of ring storage")]
	Reserve {
		size: usize,
		#[source]
		source: TryReserveError,
	},
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let Self { op, kind, source } = self;
		if let Some(source) = source {
			write!(f, "{op} failed; {kind} ({source})")
		} else {
			write!(f, "{op} failed; {kind}")
		}
	}
}

impl StdError for Error {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		if let Some(ref source) = self.source {
			Some(source.as_ref())
		} else {
			None
		}
	}
}

impl Error {
	pub(crate) fn new(
		op: OperationKind,
		kind: ErrorKind,
		source: Option<ErrorBox>
	) -> Self {
		Self { op, kind, source }
	}

	/// Creates a new error with a custom message.
	pub fn other(
		op: OperationKind,
		message: &'static str,
		source: Option<ErrorBox>
	) -> Self {
		Self::new(op, Other(message), source)
	}

	/// Creates a new allocation error.
	pub fn alloc(error: AllocError) -> Self {
		Self::new(OperationKind::Create, Alloc, Some(error.into()))
	}

	/// Creates a new "not enough buffered data" error.
	pub fn underflow(op: OperationKind) -> Self { Self::new(op, Underflow, None) }

	/// Returns the operation kind.
	pub fn operation(&self) -> OperationKind { self.op }

	/// Sets the operation kind.
	pub fn with_operation(mut self, op: OperationKind) -> Self {
		self.op = op;
		self
	}

	/// Returns the error kind.
	pub fn kind(&self) -> ErrorKind { self.kind }

	/// Returns `true` if the error is an allocation failure.
	pub fn is_alloc(&self) -> bool { matches!(self.kind, Alloc) }

	/// Returns `true` if the error is a "not enough buffered data" error.
	pub fn is_underflow(&self) -> bool { matches!(self.kind, Underflow) }

	/// Returns the source downcast into an allocation error, if possible.
	pub fn alloc_source(&self) -> Option<&AllocError> {
		self.source()?.downcast_ref()
	}
}

impl From<&'static str> for Error {
	fn from(value: &'static str) -> Self {
		Self::other(OperationKind::Unknown, value, None)
	}
}

impl From<Error> for io::Error {
	fn from(value: Error) -> Self {
		let kind = match value.kind {
			Alloc => io::ErrorKind::OutOfMemory,
			Underflow => io::ErrorKind::UnexpectedEof,
			Other(_) => io::ErrorKind::Other,
		};
		io::Error::new(kind, value)
	}
}
