pub mod bulk_test;
pub mod peak_test;
