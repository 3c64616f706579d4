//! HTML template rendering handlers for the lookup form.

mod get_links;
mod index;

pub use get_links::{LinksForm, get_links_handler, redirect_to_form};
pub use index::{IndexTemplate, index_handler};
