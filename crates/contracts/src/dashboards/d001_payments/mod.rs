pub mod filter_state;

pub use filter_state::{collect_filter_params, export_params, FilterQueryBuilder};
