mod address;
mod file;

pub use address::RegisterAddress;
pub use file::RegisterFile;
