pub mod ops_check;
pub mod ops_id;
pub mod ops_resolve;
pub mod ops_source;
pub mod ops_versions;
