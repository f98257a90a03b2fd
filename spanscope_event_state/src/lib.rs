// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spanscope Event State: small interaction state machines for a frame-driven UI.
//!
//! Everything in this crate is single-threaded and host-clocked: there are no
//! timers or callbacks scheduled behind the caller's back. The host feeds
//! timestamps (milliseconds, any monotonic origin) and input, and polls the
//! state machines once per frame.
//!
//! - [`drag`]: Track a pointer drag and report per-move and total deltas.
//! - [`wheel`]: Classify wheel input into zoom or pan intent using modifier keys.
//! - [`debounce`]: A single-slot "settle" timer; rescheduling replaces the deadline.
//! - [`tween`]: Eased interpolation between value tuples and a single-slot
//!   [`AnimationSlot`](tween::AnimationSlot) so only one animation per axis ever runs.
//! - [`listeners`]: A set-based listener bag that registers each callback at most once.
//!
//! ## Minimal example
//!
//! ```rust
//! use spanscope_event_state::debounce::Debounce;
//! use spanscope_event_state::tween::{AnimationSlot, Tween};
//!
//! let mut settle = Debounce::new(200.0);
//! assert!(settle.schedule(0.0), "first schedule starts a burst");
//! assert!(!settle.schedule(150.0), "later schedules only push the deadline");
//! assert!(!settle.poll(300.0));
//! assert!(settle.poll(350.0));
//!
//! let mut zoom = AnimationSlot::default();
//! zoom.start(Tween::new([0.0, 1000.0], [200.0, 50.0], 0.0, 300.0));
//! let sample = zoom.get().unwrap().sample(300.0);
//! assert!(sample.done);
//! assert_eq!(sample.values, [200.0, 50.0]);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("spanscope_event_state requires either the `std` or `libm` feature");

pub mod debounce;
pub mod drag;
pub mod listeners;
mod math;
pub mod tween;
pub mod wheel;
