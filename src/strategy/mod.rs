//! Construction strategies shipped with the crate.
pub use self::describe::DescribeStrategy;

mod describe;
