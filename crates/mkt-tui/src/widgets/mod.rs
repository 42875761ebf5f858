pub mod footer;
pub mod help_modal;
pub mod notice;
