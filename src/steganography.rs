//! # 隐写术模块
//!
//! 把位序列写入像素通道的最低有效位以及读出的核心原语。
//! 本模块只操作扁平的通道缓冲区，对图像格式一无所知。

use crate::constants::CHANNELS_PER_PIXEL;
use crate::error::StegoError;

/// 载体容量 (位)：每像素 3 个通道，每通道 1 位。
pub fn capacity_bits(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS_PER_PIXEL
}

/// 把位序列写入通道字节的最低位，按缓冲区顺序
/// (行优先，像素内 R、G、B)。位数超过通道数时返回容量错误，
/// 且不触碰缓冲区；位数不足时其余通道字节原样保留。
pub fn embed_bits(channels: &mut [u8], bits: &[u8]) -> Result<(), StegoError> {
    if bits.len() > channels.len() {
        return Err(StegoError::CapacityExceeded {
            needed: bits.len(),
            available: channels.len(),
        });
    }

    for (channel, &bit) in channels.iter_mut().zip(bits) {
        *channel = (*channel & 0xFE) | (bit & 1);
    }

    Ok(())
}

/// 读出每个通道字节的最低位，顺序与嵌入一致。
/// 输出长度恒等于通道数，与实际嵌入了多少无关。
pub fn extract_bits(channels: &[u8]) -> Vec<u8> {
    channels.iter().map(|channel| channel & 1).collect()
}
