//! 金额类型
//!
//! 以美分为单位的定点数，税额计算全程不经过浮点

use std::fmt;
use std::ops::Add;

/// 金额（美分定点数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// 零金额
    pub const ZERO: Money = Money { cents: 0 };

    /// 从整美元数创建
    pub fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    /// 从美分数创建
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// 美分数
    pub fn cents(self) -> i64 {
        self.cents
    }

    /// 是否为正金额
    pub fn is_positive(self) -> bool {
        self.cents > 0
    }

    /// 减法，差值为负时收敛到零
    pub fn sub_or_zero(self, other: Money) -> Money {
        Money {
            cents: (self.cents - other.cents).max(0),
        }
    }

    /// 按整数百分比计算，结果向下取整到美分
    pub fn percent(self, rate: u32) -> Money {
        Money {
            cents: self.cents * i64::from(rate) / 100,
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl fmt::Display for Money {
    /// 整美元不带小数位，否则保留两位
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cents % 100 == 0 {
            write!(f, "{}", self.cents / 100)
        } else {
            write!(f, "{}.{:02}", self.cents / 100, (self.cents % 100).abs())
        }
    }
}
