//! # 载荷编码模块
//!
//! 把明文消息变成可打印的载荷文本，以及逆过程。
//! 编码：加密成自包含密文块，再做 base64-url 编码 (字母表
//! `A–Z a–z 0–9 - _`，补 `=` 到 4 的倍数)。
//! 解码：先按需补回 `=`，再做 base64-url 解码和认证解密。

use crate::crypto::Cipher;
use crate::error::StegoError;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use std::borrow::Cow;

/// 加密消息并编码成 base64-url 载荷文本。
/// 输出长度总是 4 的倍数，且只含 base64-url 字符和 `=`。
pub fn encode(message: &str, cipher: &Cipher) -> Result<String, StegoError> {
    let blob = cipher.encrypt(message.as_bytes())?;
    Ok(URL_SAFE.encode(blob))
}

/// 解码载荷文本并解密出消息。
///
/// 入口先把载荷长度补回 4 的倍数。无长度头的旧格式在剥离 NUL
/// 后可能丢失尾部的 `=`，这一步只是启发式修复，并不保证载荷完好；
/// 随后的 base64 解码和认证解密会让任何不完整的载荷确定性地失败。
///
/// # Errors
///
/// * [`StegoError::PaddingAmbiguous`] - 载荷长度无法补成合法形状。
/// * [`StegoError::Base64`] - 载荷不是合法的 base64-url 文本。
/// * [`StegoError::DecryptionFailed`] - 密钥不匹配或密文被破坏。
/// * [`StegoError::InvalidUtf8`] - 解密结果不是合法 UTF-8。
pub fn decode(payload: &[u8], cipher: &Cipher) -> Result<String, StegoError> {
    let padded = restore_padding(payload)?;
    let blob = URL_SAFE.decode(padded.as_ref())?;
    let plaintext = cipher.decrypt(&blob)?;
    String::from_utf8(plaintext).map_err(|_| StegoError::InvalidUtf8)
}

/// 把载荷补 `=` 到 4 的倍数。长度 ≡ 1 (mod 4) 的载荷不可能是
/// 合法 base64，无法修复。
fn restore_padding(payload: &[u8]) -> Result<Cow<'_, [u8]>, StegoError> {
    match payload.len() % 4 {
        0 => Ok(Cow::Borrowed(payload)),
        1 => Err(StegoError::PaddingAmbiguous),
        remainder => {
            let mut padded = payload.to_vec();
            padded.resize(payload.len() + 4 - remainder, b'=');
            Ok(Cow::Owned(padded))
        }
    }
}
