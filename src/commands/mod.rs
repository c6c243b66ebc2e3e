pub mod browse;
pub mod configure;
pub mod show;
pub mod tree;

pub use browse::*;
pub use configure::*;
pub use show::*;
pub use tree::*;
