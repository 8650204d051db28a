//! Core domain types for Inndle
//!
//! This module contains the attribute schema, character records and the
//! comparison engine. Everything here is pure: no I/O, no global state.

mod attribute;
mod compare;
mod record;
mod verdict;

pub use attribute::{Attribute, AttributeKind, AttributeSchema};
pub use compare::{CompareError, compare, compare_binary, compare_scalar, compare_sets};
pub use record::{CharacterRecord, VALUE_DELIMITER, parse_values};
pub use verdict::{BinaryOutcome, Outcome, ScalarOutcome, SetOutcome, Verdict};
