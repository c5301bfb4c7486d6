pub mod session;
pub mod translate;
pub mod voice_input;
pub mod voice_output;
