//! # lsb_seal 库
//!
//! 本库包含加密 LSB 隐写工具的核心逻辑。

// 声明库包含的所有模块。

pub mod analysis;
pub mod bits;
pub mod cli;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod handler;
pub mod payload;
pub mod pipeline;
pub mod steganography;
