//! Hyphenation of natural-language text with TeX patterns.
//!
//! A [`Hyphenator`] holds a shared [`RuleSet`] (loaded from a TeX pattern
//! table) and inserts U+00AD SOFT HYPHEN at every admissible break point
//! of every word in a phrase. Visible dashes (`-` and U+2010) get a
//! U+200B ZERO WIDTH SPACE after them so a renderer may wrap there too.
//!
//! ```
//! use texhyph::Hyphenator;
//!
//! let h = Hyphenator::from_table_str(r"\patterns{hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n}")
//!     .unwrap();
//! assert_eq!(h.insert_hyphens("hyphenation", "-"), "hy-phen-ation");
//! ```
//!
//! # Architecture
//!
//! - [`hyphenator`] -- Word weights and the phrase scanner
//! - [`handle`] -- The shareable [`Hyphenator`] handle and table loading

pub mod handle;
pub mod hyphenator;

pub use handle::{Hyphenator, HyphenatorError};
pub use hyphenator::HyphenationOptions;
pub use texhyph_core::weights::Weight;
pub use texhyph_patterns::{Diagnostics, ParseError, RuleSet, Severity, TableParser};
