pub mod admin;
pub mod path_id;
