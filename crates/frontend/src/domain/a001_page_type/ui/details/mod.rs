mod attribute_search;
mod attributes_card;
mod dialogs;
mod form;
mod metadata_card;
pub mod model;
mod page;
pub mod view_model;

pub use page::PageTypeDetailsPage;
