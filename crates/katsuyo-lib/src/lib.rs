//! Classification and conjugation engine for Japanese verbs.
//!
//! Given a verb in dictionary form, [`conjugate`] determines its
//! morphological class (五段, 一段, or one of the tabulated irregular
//! verbs, including compounds built on する and 来る), extracts the
//! invariant stem, and produces the complete catalogue of conjugated
//! forms, each annotated with its surface, phonetic reading and
//! romanization.
//!
//! The whole engine is a pure computation over static tables: no I/O,
//! no shared mutable state, and deterministic output apart from the
//! result timestamp.
//!
//! ```
//! let result = katsuyo_lib::conjugate("書く")?;
//!
//! assert_eq!(result.get(katsuyo_lib::Form::Te).unwrap().kanji, "書いて");
//! assert_eq!(result.get_by_id("past-plain").unwrap().kanji, "書いた");
//! # Ok::<_, katsuyo_lib::ConjugateError>(())
//! ```

pub mod classify;
pub use self::classify::{classify, IrregularKind, VerbInfo, VerbKind};

mod concat;
pub use self::concat::Concat;

mod error;
pub use self::error::ConjugateError;

pub mod inflection;
pub use self::inflection::{Category, Form, Formality};

pub mod kana;

pub mod romaji;

mod conjugate;
pub use self::conjugate::{colloquial_potential, conjugate, ConjugationForm, ConjugationResult};
