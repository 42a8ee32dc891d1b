// Job description analysis pipeline.
// Implements: skill extraction, stack detection, role/experience classification,
// responsibility and company extraction, interview question selection, compatibility scoring.
// Every step is pure; persistence happens in the handlers after `JobAnalyzer::analyze` returns.

pub mod classify;
pub mod company;
pub mod handlers;
pub mod pipeline;
pub mod question_bank;
pub mod questions;
pub mod responsibilities;
pub mod scoring;
pub mod sections;
pub mod skills;
