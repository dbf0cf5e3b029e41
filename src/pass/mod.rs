//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;
mod writer;

pub use charset::CharClass;
pub use generate::{Request, generate, generate_batch, generate_with, min_length, shuffle};
pub use writer::SecureBufWriter;
