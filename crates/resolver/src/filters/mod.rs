//! The individual filter stages.

pub mod already_watched;
pub mod genre_overlap;

pub use already_watched::AlreadyWatchedFilter;
pub use genre_overlap::GenreOverlapFilter;
