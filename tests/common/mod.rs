#![allow(dead_code)] // Each test binary uses a different subset

pub mod builders;
pub mod mock_submitters;
pub mod strategies;

pub use builders::*;
pub use mock_submitters::*;
