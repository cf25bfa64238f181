//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of analysis results for the formatters.

mod report_read_model;
mod report_read_model_builder;

pub use report_read_model::{
    format_path, AncestorsView, ClosureView, DuplicateGroupView, DuplicatesView, MemberView,
    MembersView, ReportBody, ReportMetadataView, ReportReadModel, VersionView,
};
pub use report_read_model_builder::ReportReadModelBuilder;
