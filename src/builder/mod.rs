//! Builder API for engine construction.
//!
//! # Example
//!
//! ```
//! use hangman::builder::EngineBuilder;
//! use hangman::core::AlphabetKind;
//!
//! let engine = EngineBuilder::new()
//!     .max_guesses(8)
//!     .alphabet(AlphabetKind::Swedish)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(engine.max_guesses(), 8);
//! ```

pub mod engine;
pub mod error;

pub use engine::EngineBuilder;
pub use error::BuildError;
