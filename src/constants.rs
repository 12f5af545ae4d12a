/// 默认的密钥文件路径。
/// `hide` 命令在该文件不存在时会自动生成一个新密钥。
pub const DEFAULT_KEY_FILE: &str = "key.key";

/// 默认输出文件名的前缀。
/// 未指定输出路径时，结果图像保存为 `sealed_<原文件名>`。
pub const SEALED_PREFIX: &str = "sealed_";

/// 载荷长度头所占的位数。
/// 长度头是一个 32 位大端序整数，记录载荷的字符数，
/// 先于载荷本身嵌入，使提取端能够精确切分载荷位。
pub const LEN_HEADER_BITS: usize = 32;

/// 每个像素可嵌入的位数。
/// R、G、B 三个通道各嵌入 1 位，Alpha 通道不参与。
pub const CHANNELS_PER_PIXEL: usize = 3;
