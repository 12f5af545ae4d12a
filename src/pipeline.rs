//! # 隐写流水线模块
//!
//! 加密载荷与图像之间的顶层编排。
//! 写入格式：32 位大端载荷字符数头部，后随载荷文本逐字节的比特，
//! 按行优先、R→G→B 的顺序写进 RGB 通道的最低有效位。
//! 读取时优先解析带头部的格式；头部不成立时回退到无头部的旧格式
//! (整幅图的 LSB 流去掉全零字节组后作为载荷)。

use crate::bits::{bits_to_bytes, bits_to_bytes_lossy, bytes_to_bits};
use crate::constants::LEN_HEADER_BITS;
use crate::crypto::Cipher;
use crate::error::StegoError;
use crate::payload;
use crate::steganography::{self, capacity_bits};
use image::RgbImage;

/// 把消息加密后藏进图像的 LSB 信道。
///
/// # Arguments
///
/// * `image` - 载体图像，就地修改
/// * `message` - 要隐藏的明文消息
/// * `cipher` - 加密器
///
/// # Errors
///
/// 容量不足时返回 [`StegoError::CapacityExceeded`]，图像保持原样。
pub fn conceal(image: &mut RgbImage, message: &str, cipher: &Cipher) -> Result<(), StegoError> {
    let payload = payload::encode(message, cipher)?;
    let available = capacity_bits(image.width(), image.height());
    let bits = frame_bits(payload.as_bytes(), available)?;
    steganography::embed_bits(image, &bits)
}

/// 从图像的 LSB 信道恢复出明文消息。
///
/// # Arguments
///
/// * `image` - 可能藏有消息的图像
/// * `cipher` - 解密器
///
/// # Errors
///
/// * [`StegoError::FrameInvalid`] - 没有找到可解析的载荷。
/// * [`StegoError::DecryptionFailed`] - 找到了载荷但密钥不匹配或密文被破坏。
/// * [`StegoError::InvalidUtf8`] - 解密结果不是合法 UTF-8。
pub fn reveal(image: &RgbImage, cipher: &Cipher) -> Result<String, StegoError> {
    let bits = steganography::extract_bits(image);
    match decode_framed(&bits, cipher) {
        Ok(message) => Ok(message),
        // 解密和 UTF-8 错误说明确实找到了载荷，不再尝试旧格式
        Err(err @ (StegoError::DecryptionFailed | StegoError::InvalidUtf8)) => Err(err),
        Err(frame_err) => match decode_legacy(&bits, cipher) {
            Ok(message) => Ok(message),
            Err(err @ (StegoError::DecryptionFailed | StegoError::InvalidUtf8)) => Err(err),
            Err(_) => Err(frame_err),
        },
    }
}

/// 组装帧比特流：32 位大端字符数头部 + 载荷比特。
fn frame_bits(payload: &[u8], available: usize) -> Result<Vec<u8>, StegoError> {
    let needed = LEN_HEADER_BITS.saturating_add(payload.len().saturating_mul(8));
    if needed > available {
        return Err(StegoError::CapacityExceeded { needed, available });
    }
    let count = u32::try_from(payload.len())
        .map_err(|_| StegoError::CapacityExceeded { needed, available })?;

    let mut bits = Vec::with_capacity(needed);
    bits.extend(bytes_to_bits(&count.to_be_bytes()));
    bits.extend(bytes_to_bits(payload));
    Ok(bits)
}

/// 解析带长度头部的帧。头部声明的载荷超出图像容量或字符数为零
/// 都视作没有帧。
fn decode_framed(bits: &[u8], cipher: &Cipher) -> Result<String, StegoError> {
    if bits.len() < LEN_HEADER_BITS {
        return Err(StegoError::FrameInvalid);
    }
    let (header, rest) = bits.split_at(LEN_HEADER_BITS);
    let header = bits_to_bytes(header);
    let count = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as usize;
    if count == 0 {
        return Err(StegoError::FrameInvalid);
    }
    let payload_bits = count.checked_mul(8).ok_or(StegoError::FrameInvalid)?;
    if payload_bits > rest.len() {
        return Err(StegoError::FrameInvalid);
    }

    let payload = bits_to_bytes(&rest[..payload_bits]);
    payload::decode(&payload, cipher)
}

/// 解析无头部的旧格式：整幅图的 LSB 按 8 位一组转成字节并丢弃
/// 全零组。只有载荷之后的信道位全为零时才能成功。
fn decode_legacy(bits: &[u8], cipher: &Cipher) -> Result<String, StegoError> {
    let payload = bits_to_bytes_lossy(bits);
    if payload.is_empty() {
        return Err(StegoError::FrameInvalid);
    }
    payload::decode(&payload, cipher)
}
