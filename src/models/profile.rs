//! 字段角色配置
//!
//! 生成逻辑不再硬编码"第 14 个字段是工资"这类位置假设，
//! 而是通过一份显式的角色 → 位置配置（`FormProfile`）在提取结果上
//! 解析出角色 → 字段标识符的绑定（`RoleBinding`）。
//! 内置默认值对应 2016 版 f1040ez 的第一页控件布局，
//! 其他表单布局可用 TOML 文件覆盖。

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde::Deserialize;

/// 表单字段的语义角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    FirstName,
    LastName,
    Ssn,
    StreetAddress,
    AptNumber,
    CityStateZip,
    Wages,
    TaxableInterest,
    UnemploymentComp,
    GrossIncome,
    StandardDeduction,
    TaxableIncome,
    TaxWithheld,
    EarnedIncomeCredit,
    TotalPayments,
    Tax,
    HealthCare,
    TotalTax,
    Refund,
    RoutingNumber,
    AccountNumber,
    AmountOwed,
    Occupation,
    Phone,
}

/// 角色 → 第一页注释列表中的位置
///
/// 不可变配置，缺省键由内置布局补齐
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormProfile {
    pub first_name: usize,
    pub last_name: usize,
    pub ssn: usize,
    pub street_address: usize,
    pub apt_number: usize,
    pub city_state_zip: usize,
    pub wages: usize,
    pub taxable_interest: usize,
    pub unemployment_comp: usize,
    pub gross_income: usize,
    pub standard_deduction: usize,
    pub taxable_income: usize,
    pub tax_withheld: usize,
    pub earned_income_credit: usize,
    pub total_payments: usize,
    pub tax: usize,
    pub health_care: usize,
    pub total_tax: usize,
    pub refund: usize,
    pub routing_number: usize,
    pub account_number: usize,
    pub amount_owed: usize,
    pub occupation: usize,
    pub phone: usize,
}

impl Default for FormProfile {
    /// 2016 版 f1040ez 第一页布局
    fn default() -> Self {
        Self {
            first_name: 0,
            last_name: 1,
            ssn: 2,
            street_address: 6,
            apt_number: 7,
            city_state_zip: 8,
            wages: 14,
            taxable_interest: 16,
            unemployment_comp: 18,
            gross_income: 20,
            standard_deduction: 24,
            taxable_income: 26,
            tax_withheld: 28,
            earned_income_credit: 30,
            total_payments: 34,
            tax: 36,
            health_care: 39,
            total_tax: 41,
            refund: 44,
            routing_number: 46,
            account_number: 49,
            amount_owed: 50,
            occupation: 57,
            phone: 58,
        }
    }
}

impl FormProfile {
    /// 角色与位置的完整列表（按位置升序）
    fn entries(&self) -> [(FieldRole, usize); 24] {
        [
            (FieldRole::FirstName, self.first_name),
            (FieldRole::LastName, self.last_name),
            (FieldRole::Ssn, self.ssn),
            (FieldRole::StreetAddress, self.street_address),
            (FieldRole::AptNumber, self.apt_number),
            (FieldRole::CityStateZip, self.city_state_zip),
            (FieldRole::Wages, self.wages),
            (FieldRole::TaxableInterest, self.taxable_interest),
            (FieldRole::UnemploymentComp, self.unemployment_comp),
            (FieldRole::GrossIncome, self.gross_income),
            (FieldRole::StandardDeduction, self.standard_deduction),
            (FieldRole::TaxableIncome, self.taxable_income),
            (FieldRole::TaxWithheld, self.tax_withheld),
            (FieldRole::EarnedIncomeCredit, self.earned_income_credit),
            (FieldRole::TotalPayments, self.total_payments),
            (FieldRole::Tax, self.tax),
            (FieldRole::HealthCare, self.health_care),
            (FieldRole::TotalTax, self.total_tax),
            (FieldRole::Refund, self.refund),
            (FieldRole::RoutingNumber, self.routing_number),
            (FieldRole::AccountNumber, self.account_number),
            (FieldRole::AmountOwed, self.amount_owed),
            (FieldRole::Occupation, self.occupation),
            (FieldRole::Phone, self.phone),
        ]
    }

    /// 覆盖全部角色所需的最小字段数
    pub fn min_field_count(&self) -> usize {
        self.entries()
            .iter()
            .map(|(_, position)| position + 1)
            .max()
            .unwrap_or(0)
    }

    /// 在提取出的字段标识符列表上解析角色绑定
    ///
    /// 字段数量不足以覆盖所有配置位置时返回错误，
    /// 绑定失败发生在任何抽样之前
    pub fn resolve(&self, fields: &[String]) -> AppResult<RoleBinding> {
        let required = self.min_field_count();
        if fields.len() < required {
            return Err(AppError::form_read_insufficient_fields(
                required,
                fields.len(),
            ));
        }

        let mut bound = IndexMap::new();
        for (role, position) in self.entries() {
            bound.insert(role, fields[position].clone());
        }

        Ok(RoleBinding { bound })
    }
}

/// 角色 → 字段标识符的绑定结果
#[derive(Debug, Clone)]
pub struct RoleBinding {
    bound: IndexMap<FieldRole, String>,
}

impl RoleBinding {
    /// 角色对应的字段标识符
    ///
    /// 绑定由 `FormProfile::resolve` 构造，全部角色必然在场
    pub fn field(&self, role: FieldRole) -> &str {
        self.bound[&role].as_str()
    }
}
