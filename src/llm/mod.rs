pub mod stateless_llm_interface;
pub mod openai_compatible_llm;

#[cfg(test)]
pub mod testing;

pub use stateless_llm_interface::*;
pub use openai_compatible_llm::*;
