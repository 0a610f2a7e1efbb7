mod disambiguate;
mod enumerate;
mod limit;
mod pipeline;
mod render;
mod types;

pub use disambiguate::{disambiguate, disambiguate_path, EdgeUsageContext};
pub use enumerate::find_paths;
pub use limit::limit_duplicates;
pub use pipeline::{all_pairs, get_paths, resolve_paths};
pub use render::{interface_ids, render_path};
pub use types::{
    InterfaceMatch, PathSearchOptions, DEFAULT_EXTRA_HOPS, DEFAULT_MAX_DUPLICATES,
    DEFAULT_RESULT_CAP,
};
