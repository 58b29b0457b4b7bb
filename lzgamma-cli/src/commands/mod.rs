//! Command implementations for the lzgamma CLI.

pub mod compress;
pub mod decompress;
pub mod inspect;
pub mod lzw;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use inspect::cmd_inspect;
pub use lzw::{cmd_lzw_compress, cmd_lzw_decompress};
