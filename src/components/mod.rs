pub mod footer;
pub mod form_wizard;
pub mod nav;
