mod months;

pub use months::{months_to_fetch, ArchiveMonth};
