pub mod ar_viewer;
pub mod dashboard;
