//! Row models and DTOs.
//!
//! Each submodule contains `FromRow` structs matching database rows and the
//! `Serialize` shapes sent to clients. Wire names keep the identifiers the
//! site's pages already use (`inquiry_id`, `file_id`, `service_id`, ...).

pub mod content;
pub mod inquiry;
