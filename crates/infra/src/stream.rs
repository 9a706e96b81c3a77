pub mod file;
pub mod memory;

pub use file::FileCharStream;
pub use memory::MemoryStream;
