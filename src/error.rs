//! # 错误类型模块
//!
//! 定义隐写管线从编码、加密到提取、解密全过程中的失败情况。
//! 二进制入口 (`handler`) 使用 `anyhow` 包装这些错误并附加文件路径等上下文。

use thiserror::Error;

/// 隐写管线中所有可能的失败情况。
#[derive(Debug, Error)]
pub enum StegoError {
    /// 消息所需的位数超过了载体图像的容量 (3 × 宽 × 高)。
    /// 返回该错误时载体像素保持原样，不会发生部分写入。
    #[error("the message needs {needed} bits but the carrier only holds {available}")]
    CapacityExceeded {
        /// 长度头加载荷共需的位数。
        needed: usize,
        /// 载体可容纳的位数。
        available: usize,
    },

    /// 提取的位流中没有合法的长度头。
    #[error("no valid payload header found (the image may not contain a hidden message)")]
    FrameInvalid,

    /// 载荷长度无法通过补 `=` 恢复成合法的 base64 形状 (长度 ≡ 1 mod 4)。
    #[error("payload length cannot be restored to a valid base64 shape")]
    PaddingAmbiguous,

    /// 载荷不是合法的 base64-url 文本。
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// 加密失败。
    #[error("encryption failed")]
    EncryptionFailed,

    /// 解密失败：密钥不匹配，或密文被截断、篡改。
    /// 认证加密保证此时不会返回看似合理的错误明文。
    #[error("decryption failed: wrong key or corrupted payload")]
    DecryptionFailed,

    /// 解密得到的明文不是合法的 UTF-8 文本。
    #[error("decrypted message is not valid UTF-8")]
    InvalidUtf8,
}
