//! # 加密模块
//!
//! 用 AES-256-GCM 提供认证加密能力，并负责密钥文件的生成与读写。
//! 每次加密随机生成 12 字节 nonce，置于密文 (含 16 字节认证标签) 之前，
//! 合成一个自包含的密文块。密钥错误或密文被篡改时解密可靠地失败，
//! 不会返回错误的明文。

use crate::error::StegoError;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::RngCore;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// 密钥长度 (字节)。
pub const KEY_LEN: usize = 32;
/// nonce 长度 (字节)。
pub const NONCE_LEN: usize = 12;
/// GCM 认证标签长度 (字节)。
pub const TAG_LEN: usize = 16;

/// 认证加密能力，持有一把对称密钥。
pub struct Cipher {
    aead: Aes256Gcm,
}

impl Cipher {
    pub fn new(key: &[u8; KEY_LEN]) -> Self {
        Self {
            aead: Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key)),
        }
    }

    /// 加密明文，返回 `nonce ‖ 密文 ‖ 标签` 的自包含密文块。
    /// nonce 每次随机生成，同一明文两次加密的结果不同。
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, StegoError> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce_bytes);

        let ciphertext = self
            .aead
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
            .map_err(|_| StegoError::EncryptionFailed)?;

        let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&ciphertext);
        Ok(blob)
    }

    /// 解密由 [`Cipher::encrypt`] 产生的密文块。
    ///
    /// # Errors
    ///
    /// 密钥不匹配、密文被截断或篡改时返回 [`StegoError::DecryptionFailed`]。
    pub fn decrypt(&self, blob: &[u8]) -> Result<Vec<u8>, StegoError> {
        if blob.len() < NONCE_LEN + TAG_LEN {
            return Err(StegoError::DecryptionFailed);
        }

        let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);
        self.aead
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| StegoError::DecryptionFailed)
    }
}

/// 随机生成一把新密钥。
pub fn generate_key() -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    rand::rng().fill_bytes(&mut key);
    key
}

/// 把密钥原样写入文件。
pub fn write_key(path: &Path, key: &[u8; KEY_LEN]) -> io::Result<()> {
    fs::write(path, key)
}

/// 从文件读取密钥，文件内容必须恰好是 [`KEY_LEN`] 字节。
pub fn load_key(path: &Path) -> io::Result<[u8; KEY_LEN]> {
    let bytes = fs::read(path)?;
    bytes.as_slice().try_into().map_err(|_| {
        io::Error::new(
            ErrorKind::InvalidData,
            format!(
                "The key file must contain exactly {KEY_LEN} bytes, found {}.",
                bytes.len()
            ),
        )
    })
}

/// 读取密钥文件；不存在时生成一把新密钥并写入该路径。
/// 返回密钥和一个是否新生成的标志。
pub fn load_or_generate(path: &Path) -> io::Result<([u8; KEY_LEN], bool)> {
    if path.exists() {
        Ok((load_key(path)?, false))
    } else {
        let key = generate_key();
        write_key(path, &key)?;
        Ok((key, true))
    }
}
