mod parser;
mod resolve;

pub use parser::Scanner;
pub use resolve::{resolve_imports, Resolution};
