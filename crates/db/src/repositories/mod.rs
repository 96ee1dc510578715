//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` (or a `&mut PgConnection` when composed into a transaction) as
//! the first argument.

pub mod attachment_repo;
pub mod content_repo;
pub mod inquiry_repo;

pub use attachment_repo::AttachmentRepo;
pub use content_repo::ContentRepo;
pub use inquiry_repo::InquiryRepo;
