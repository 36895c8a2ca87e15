//! Shared types and utilities for texhyph.
//!
//! - [`character`] -- letter classification, case folding and the invisible
//!   break markers (soft hyphen, zero-width space)
//! - [`weights`] -- break-weight vectors and their merge rule

pub mod character;
pub mod weights;
