pub mod cardinality;

pub use cardinality::{expect_non_empty, expect_single};
