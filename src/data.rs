mod filter;
pub use filter::*;

mod profile;
pub use profile::*;

mod vote;
pub use vote::*;
