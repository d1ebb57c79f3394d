pub mod add_record;
pub mod explore;

pub use add_record::add_record_page;
pub use explore::{explore_page, ExploreVm};
