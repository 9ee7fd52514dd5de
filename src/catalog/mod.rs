mod dataset;
mod movie;

pub use dataset::{Dataset, DatasetError};
pub use movie::{
    is_placeholder, MovieRecord, DEFAULT_CATEGORY, PLACEHOLDER_CATEGORY, PLACEHOLDER_TITLE_PREFIX,
};
