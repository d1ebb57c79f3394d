pub mod filters;
pub mod popup;
pub mod record;
pub mod sale_form;
