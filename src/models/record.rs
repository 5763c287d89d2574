//! 记录类型
//!
//! 一条记录 = 字段标识符 → 值 的有序映射，每个周期生成一条，
//! 填入 PDF 并追加到批次后不再修改

use crate::models::money::Money;
use indexmap::IndexMap;
use std::fmt;

/// 字段值
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// 自由文本（姓名、地址、职业等）
    Text(String),
    /// 无金额含义的数字串（银行路由号、账号）
    Count(u64),
    /// 金额
    Amount(Money),
}

impl FieldValue {
    /// 取金额值（非金额字段返回 None）
    pub fn as_amount(&self) -> Option<Money> {
        match self {
            FieldValue::Amount(m) => Some(*m),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Count(n) => write!(f, "{}", n),
            FieldValue::Amount(m) => write!(f, "{}", m),
        }
    }
}

/// 一条生成的记录
///
/// 列顺序即插入顺序，CSV 输出直接沿用
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: IndexMap<String, FieldValue>,
}

impl Record {
    /// 创建空记录
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// 写入一个字段（同名字段后写覆盖先写）
    pub fn insert(&mut self, field: impl Into<String>, value: FieldValue) {
        self.values.insert(field.into(), value);
    }

    /// 按字段标识符取值
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// 按字段标识符取金额值
    pub fn amount(&self, field: &str) -> Option<Money> {
        self.values.get(field).and_then(FieldValue::as_amount)
    }

    /// 列标识符（插入顺序）
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// 遍历全部字段
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// 字段数量
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
