//! The game engine: owner of the current round.
//!
//! [`GameEngine`] holds the deployment's rules and at most one [`Round`].
//! Callers drive it with `start_round` / `submit_guess` and render from
//! `snapshot`. Each engine is independent; tests or multiplayer hosts can
//! run as many side by side as they like.
//!
//! [`Round`]: crate::core::Round

mod machine;

pub use machine::GameEngine;
