pub mod system;
pub mod stateless_llm;
pub mod utils;

pub use system::*;
pub use stateless_llm::*;
