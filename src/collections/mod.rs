pub mod free_list;
pub mod sparse_set;
