pub mod api_utils;
pub mod bindings;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod export;
pub mod form_data;
pub mod modal;
pub mod request_sequence;
