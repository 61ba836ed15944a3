//! kulti-types: canonical wire vocabulary for Kulti streaming.
//! Single source of truth for all streaming payloads. Every adapter
//! (Claude Code, OpenClaw, Gemini, Codex) and every workspace crate
//! imports from here.

pub mod types;

pub use types::*;
