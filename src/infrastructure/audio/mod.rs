pub mod microphone;
pub mod speaker;
pub mod wav;
