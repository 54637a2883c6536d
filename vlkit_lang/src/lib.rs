//! Language-level utilities for Verilog, SystemVerilog, and Verilog-AMS
//! source text.  This crate is the semantic bedrock that tokenizers,
//! preprocessors, and netlist tools build on; it answers four families of
//! questions without doing any parsing of its own:
//!
//! - Symbol classification: is this word a keyword, a backticked compiler
//!   directive, or a gate primitive, and which standard introduced it?
//!   Classification is parameterized by the language standard in effect
//!   ([`lang`]).
//! - Numeric literal interpretation: width, signedness, and value of
//!   sized and based literals such as `32'sh1b` ([`number`]).
//! - Comment stripping that respects string literals and preserves every
//!   newline, so line numbers stay stable ([`comment`]).
//! - Bus expression expansion: turning `foo[5:1:2,10:9]` into the ordered
//!   list of scalar references it denotes ([`bus`]).
//!
//! All operations are pure functions of their input except for the
//! process-wide active standard, which lives behind a read-mostly lock in
//! [`lang`] and exists for callers that don't want to thread a
//! [`Language`] value through their code.

pub mod bus;
pub mod comment;
mod keywords;
pub mod lang;
pub mod number;

pub use bus::{split_bus, split_bus_nocomma};
pub use comment::strip_comments;
pub use lang::{
    is_compdirect, is_gateprim, is_keyword, language_keywords, language_maximum,
    language_standard, set_language_standard, BadStandard, Language, Standard,
};
pub use number::{
    number_bigint, number_bits, number_bitvector, number_signed, number_value, Base, BitVector,
    Number,
};
