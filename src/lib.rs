//! Translate typed or spoken text between a fixed set of languages and read
//! the result aloud.
//!
//! The translation, speech-to-text and text-to-speech engines sit behind the
//! traits in [`domain::traits`]; [`state::AppState`] wires the HTTP and
//! process-backed implementations together once at startup.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;
