pub mod meta;
pub mod scan;
