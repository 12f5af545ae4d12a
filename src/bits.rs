//! # 位编码模块
//!
//! 在 8 位字符序列与 0/1 位序列之间转换，每个字节内高位在前 (MSB first)。

/// 把字节序列展开成位序列，每字节 8 位，高位在前。
/// 输出长度恒为输入字节数的 8 倍。
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1))
        .collect()
}

/// 把位序列按 8 位一组还原成字节，末尾不足 8 位的残组被丢弃。
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8).map(group_to_byte).collect()
}

/// 无长度头格式的还原：按 8 位一组还原字节，丢弃末尾残组，
/// 并丢弃所有值为 0 的组。
///
/// 没有长度头时，载荷之后未使用的容量 (LSB 为 0 的通道) 会被读成
/// 连续的 NUL 字节，此函数靠丢弃它们来剥离载荷。代价是数据中
/// 真实的 0x00 字节同样会丢失，这是该格式的已知局限。
/// 新格式带长度头，不经过此路径。
pub fn bits_to_bytes_lossy(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(group_to_byte)
        .filter(|&byte| byte != 0)
        .collect()
}

fn group_to_byte(group: &[u8]) -> u8 {
    group.iter().fold(0u8, |byte, &bit| (byte << 1) | (bit & 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hi_expands_msb_first() {
        // 'H' = 72 = 01001000, 'I' = 73 = 01001001
        let bits = bytes_to_bits(b"HI");
        assert_eq!(
            bits,
            vec![0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1],
            "\"HI\" must expand to 0100100001001001"
        );
    }

    #[test]
    fn roundtrip_preserves_bytes() {
        let original = b"base64-url text, 8 bits per char".to_vec();
        let bits = bytes_to_bits(&original);
        assert_eq!(bits.len(), original.len() * 8);
        assert_eq!(bits_to_bytes(&bits), original);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(bytes_to_bits(&[]).is_empty());
        assert!(bits_to_bytes(&[]).is_empty());
        assert!(bits_to_bytes_lossy(&[]).is_empty());
    }

    #[test]
    fn trailing_partial_group_is_discarded() {
        let mut bits = bytes_to_bits(b"ab");
        bits.extend_from_slice(&[1, 0, 1]); // 残组
        assert_eq!(bits_to_bytes(&bits), b"ab");
        assert_eq!(bits_to_bytes_lossy(&bits), b"ab");
    }

    #[test]
    fn lossy_decode_strips_nul_groups() {
        // 载荷后未使用的容量读成 NUL，被剥离
        let mut bits = bytes_to_bits(b"Qk");
        bits.extend(bytes_to_bits(&[0, 0, 0]));
        assert_eq!(bits_to_bytes_lossy(&bits), b"Qk");
    }

    #[test]
    fn lossy_decode_also_drops_genuine_nul_bytes() {
        // 已知局限：数据内部真实的 0x00 同样丢失
        let bits = bytes_to_bits(b"A\0B");
        assert_eq!(bits_to_bytes_lossy(&bits), b"AB");
        // 精确解码不受影响
        assert_eq!(bits_to_bytes(&bits), b"A\0B");
    }
}
