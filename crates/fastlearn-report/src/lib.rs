//! fastlearn-report — Text and Markdown rendering of assessment reports.

pub mod markdown;
pub mod text;
