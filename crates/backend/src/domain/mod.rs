pub mod a001_page_type;
pub mod a002_attribute;
