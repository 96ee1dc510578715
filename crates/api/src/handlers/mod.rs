pub mod admin_inquiries;
pub mod content;
pub mod inquiries;
