pub mod attendance;
pub mod summary;

#[cfg(test)]
mod summary_test;
