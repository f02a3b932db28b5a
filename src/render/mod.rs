//! Output rendering for the CLI front-end: pretty JSON or plain text.

pub(crate) mod json;
pub(crate) mod text;
