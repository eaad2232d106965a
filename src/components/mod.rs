pub mod breadcrumb;
pub mod header;
pub mod help;
pub mod listing;
pub mod status_bar;
