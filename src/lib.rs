//! Workflow engine for authoring a Lasting Power of Attorney.
//!
//! A donor fills in an LPA section by section. The engine validates each
//! submission, applies it to the document, keeps task states consistent
//! and decides which section comes next.

pub mod config;
pub mod domain;
pub mod engine;
pub mod journey;
pub mod navigation;
pub mod paths;
pub mod store;
pub mod structured_logger;
pub mod task;
pub mod warnings;

#[cfg(test)]
pub mod testing;
