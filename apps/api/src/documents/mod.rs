//! Documents — turn uploaded resumes into plain text and editor fields.

pub mod extract;
pub mod handlers;
pub mod parser;
