//! 合成数据抽样服务 - 业务能力层
//!
//! 只负责"抽一个值"的能力，不关心字段绑定和派生公式。
//! 不引入 faker 类库，身份类字段直接从内置词表里抽

use crate::models::money::Money;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White",
];

const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Maple", "Cedar", "Pine", "Elm", "Washington", "Lake", "Hill", "Walnut",
    "Spring", "Park", "Ridge", "Church", "Highland", "Sunset",
];

const STREET_SUFFIXES: &[&str] = &["St", "Ave", "Blvd", "Dr", "Ln", "Rd", "Ct", "Way"];

const CITIES: &[&str] = &[
    "Springfield", "Franklin", "Clinton", "Greenville", "Bristol", "Fairview", "Salem", "Madison",
    "Georgetown", "Arlington", "Ashland", "Dover", "Hudson", "Milton", "Newport", "Oxford",
];

const STATES: &[&str] = &[
    "AL", "AZ", "CA", "CO", "FL", "GA", "IL", "IN", "MA", "MI", "MN", "MO", "NC", "NJ", "NY",
    "OH", "OR", "PA", "TX", "WA",
];

const OCCUPATIONS: &[&str] = &[
    "Teacher", "Accountant", "Nurse", "Electrician", "Software developer", "Chef", "Mechanic",
    "Pharmacist", "Carpenter", "Librarian", "Plumber", "Architect", "Paramedic", "Surveyor",
    "Dental hygienist", "Translator", "Web designer", "Economist", "Geologist", "Veterinarian",
];

/// 合成数据抽样器
///
/// 每个周期持有自己的随机数发生器，周期之间互不影响；
/// 固定种子时抽样序列完全可复现
pub struct DataSampler {
    rng: StdRng,
}

impl DataSampler {
    /// 用固定种子创建（可复现）
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// 用系统熵创建
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        pool[self.rng.random_range(0..pool.len())]
    }

    /// 名
    pub fn first_name(&mut self) -> String {
        self.pick(FIRST_NAMES).to_string()
    }

    /// 姓
    pub fn last_name(&mut self) -> String {
        self.pick(LAST_NAMES).to_string()
    }

    /// 9 位社会保障号，不带分隔符
    pub fn ssn(&mut self) -> String {
        format!("{}", self.rng.random_range(100_000_000u64..1_000_000_000))
    }

    /// 街道地址
    pub fn street_address(&mut self) -> String {
        format!(
            "{} {} {}",
            self.rng.random_range(1..10_000),
            self.pick(STREET_NAMES),
            self.pick(STREET_SUFFIXES)
        )
    }

    /// 门牌 / 公寓号
    pub fn building_number(&mut self) -> String {
        self.rng.random_range(1..1_000).to_string()
    }

    /// "城市 州 邮编" 一行
    pub fn city_state_zip(&mut self) -> String {
        format!(
            "{} {} {:05}",
            self.pick(CITIES),
            self.pick(STATES),
            self.rng.random_range(501..99_951)
        )
    }

    /// 职业
    pub fn occupation(&mut self) -> String {
        self.pick(OCCUPATIONS).to_string()
    }

    /// 电话号码
    pub fn phone_number(&mut self) -> String {
        format!(
            "({}) {}-{:04}",
            self.rng.random_range(200..1_000),
            self.rng.random_range(100..1_000),
            self.rng.random_range(0..10_000)
        )
    }

    /// 闭区间内的整美元金额
    pub fn dollars_between(&mut self, min: i64, max: i64) -> Money {
        Money::from_dollars(self.rng.random_range(min..=max))
    }

    /// 最多 digits 位的数字（银行路由号、账号）
    pub fn digit_run(&mut self, digits: u32) -> u64 {
        self.rng.random_range(0..10u64.pow(digits))
    }
}
