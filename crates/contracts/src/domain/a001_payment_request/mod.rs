pub mod create_form;
pub mod status;
pub mod upload;

pub use status::{DateFieldVisibility, ModalStatus};
pub use upload::{UploadCompletion, UploadFileResponse, UploadOutcome, UploadStatusLine};
