pub mod action_dialog;
pub mod confirm_button;
pub mod error_list;
pub mod not_found_page;
pub mod page_header;
pub mod table;
