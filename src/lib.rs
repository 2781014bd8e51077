//! A study collection of classic data structures and algorithms.
//!
//! # Purpose
//! Every module in this crate is a self-contained implementation of a textbook structure or
//! algorithm, written to understand it properly rather than to be used in production. Each one
//! carries its time and space complexity in its docs and a set of tests alongside it.
//!
//! # Method
//! Most of the algorithms follow the shape they take in CLRS (heapify, merge, partition, the
//! maximum subarray recursion), adjusted to fit Rust: slices instead of inclusive `p..=r` index
//! pairs, [`Option`] instead of sentinel values and [`Ord`] instead of comparing against infinity.
//!
//! A few modules lean on their siblings on purpose. The priority queue is built on the
//! [`heap`](collections::heap) sift routines, the stacks and queues are built from the
//! [`linked`](collections::linked) lists (and from each other) and the sliding window and puzzle
//! functions count things with the crate's own [hash tables](collections::hash).
//!
//! # Error Handling
//! Where an operation can fail for more than one reason, it comes in two flavours: a `try_*`
//! method which returns a [`Result`] and a plain method which panics with the error's message.
//! Operations where the only failure is "there is nothing there" (popping an empty stack,
//! extracting from an empty heap) return an [`Option`] instead.
//!
//! Errors are strongly typed: small structs implementing [`Error`](std::error::Error), combined
//! into enums for static dispatch where a method can fail in more than one way.
//!
//! # Features
//! Each module sits behind a cargo feature of the same name, with `collections-all` and
//! `algorithms-all` enabling the two halves of the crate. Everything is enabled by default.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "divide-conquer")]
#[cfg_attr(docsrs, doc(cfg(feature = "divide-conquer")))]
pub mod divide_conquer;
#[cfg(feature = "puzzles")]
#[cfg_attr(docsrs, doc(cfg(feature = "puzzles")))]
pub mod puzzles;
#[cfg(feature = "sliding-window")]
#[cfg_attr(docsrs, doc(cfg(feature = "sliding-window")))]
pub mod sliding_window;
#[cfg(feature = "sorting")]
#[cfg_attr(docsrs, doc(cfg(feature = "sorting")))]
pub mod sorting;

pub(crate) mod util;
