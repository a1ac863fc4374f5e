pub mod create_form;
pub mod file_uploader;
pub mod status_toggle;
