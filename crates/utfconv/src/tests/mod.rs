mod directions;
pub(crate) mod utils;
