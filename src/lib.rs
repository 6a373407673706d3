//! # MQ Arithmetic Coder
//!
//! *Bit-exact binary arithmetic coding, as standardized for JPEG 2000.*
//!
//! ## Intuition First
//!
//! Picture the unit interval as a number line. Every bit you code splits
//! the current interval in two, proportionally to how likely each outcome
//! is, and keeps the half that actually happened. The final message is any
//! number inside the surviving interval: likely bits shrink it barely at
//! all, so predictable data costs almost nothing to write down.
//!
//! The MQ coder is that idea made cheap: probabilities are quantized to a
//! 47-entry table so the interval update is a subtraction instead of a
//! multiplication, the interval is renormalized by left shifts, and
//! finished bits leave through a byte-wide shift register with carry
//! propagation and a bit-stuffing rule that keeps `0xFF`-marker byte pairs
//! out of the stream.
//!
//! ## The Problem
//!
//! Before multiplication-free coders, we had a trade-off:
//! - **Huffman coding**: fast, but spends at least one bit per symbol.
//! - **Classic arithmetic coding**: optimal rate, but one multiply and
//!   divide per bit, plus delicate carry handling.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon            Entropy as the fundamental limit
//! 1976  Rissanen, Pasco    Arithmetic coding: optimal rate
//! 1988  IBM                Q-coder: table-driven, multiplication-free
//! 1993  JBIG               QM-coder refinement
//! 2000  JPEG 2000          MQ-coder standardized (ITU-T T.800 Annex C)
//! ```
//!
//! The key insight, inherited from the Q-coder line, is that an adaptive
//! probability estimate does not need to be precise, only cheap to update
//! and quick to converge. A 47-state machine per context does
//! both, and its transitions double as the probability model shared by
//! encoder and decoder.
//!
//! ## Mathematical Formulation
//!
//! With interval width $A$ and quantized LPS probability $p$, coding a bit
//! updates
//!
//! ```text
//! MPS: A' = A - p        LPS: A' = p
//! ```
//!
//! with the subintervals swapped when $A - p < p$ (conditional exchange),
//! and $A$ doubled until $A \geq 2^{15}$ again, shifting code bits out
//! through the carry-aware byte register.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(1)$ per bit (a subtraction, a table lookup, and an
//!   amortized-constant number of shifts).
//! - **Space**: $O(N)$ for $N$ contexts, two bytes each.
//!
//! ## Failure Modes
//!
//! 1. **Marker collision**: a corrupt stream can place a `0xFF` byte before
//!    a disallowed successor; decoding reports it instead of guessing.
//! 2. **Schedule mismatch**: decoding with a different context or
//!    probability schedule than the encoder silently yields garbage; the
//!    schedule is part of the protocol, not the stream.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **Context mode**: adaptive per-context estimation via the standard
//!   47-state table.
//! - **Explicit-probability mode**: callers quantize their own
//!   probabilities with [`prob0_to_mq`].
//! - **Optimal termination**: the minimal flush whose decoded interval
//!   still pins down the message, alongside the always-safe easy flush.
//!
//! ## References
//!
//! - ITU-T T.800 / ISO/IEC 15444-1, Annex C: "Arithmetic entropy coding".
//! - Taubman, D., Marcellin, M. (2002). "JPEG2000: Image Compression
//!   Fundamentals, Standards and Practice."
//! - Pennebaker, W., et al. (1988). "An overview of the basic principles of
//!   the Q-Coder adaptive binary arithmetic coder."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coder;
pub mod error;
pub mod state;
pub mod stream;

pub use coder::{mq_to_prob0, prob0_to_mq, MqCoder};
pub use error::Error;
pub use state::ContextSet;
pub use stream::ByteStream;
