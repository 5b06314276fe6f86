//! Export format helpers shared by the parser.
//!
//! The header regex, the timestamp formats, and the sender split live here so
//! the parser itself stays a small segmentation loop.

pub mod whatsapp;

pub use whatsapp::{DateFormat, parse_whatsapp_timestamp, split_sender};
