//! 字段名称清洗 - 基础设施层
//!
//! 表单里的 `/T` 值常带 UTF-16 BOM 和各种标点杂质，
//! 统一解码并剥掉非字母数字字符后才能作为字段标识符使用

use regex::Regex;

/// 把原始名称字节解码成字符串
///
/// 带 UTF-16BE BOM 的按 UTF-16 解，末尾落单的字节丢弃；
/// 其余按 UTF-8 宽松解码，坏字节替换
pub fn decode_raw_name(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

/// 字段名称清洗器
///
/// 剥掉所有非字母数字、非空白的字符，再去掉首尾空白
pub struct FieldNameCleaner {
    strip: Regex,
}

impl FieldNameCleaner {
    /// 创建清洗器
    pub fn new() -> Self {
        Self {
            strip: Regex::new(r"[^\w\s]").expect("字段清洗正则不合法"),
        }
    }

    /// 原始名称字节 → 规范化的字段标识符
    pub fn clean(&self, raw: &[u8]) -> String {
        let decoded = decode_raw_name(raw);
        self.strip.replace_all(&decoded, "").trim().to_string()
    }
}

impl Default for FieldNameCleaner {
    fn default() -> Self {
        Self::new()
    }
}
