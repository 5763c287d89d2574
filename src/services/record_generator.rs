//! 记录生成服务 - 业务能力层
//!
//! 只负责"生成一条完整记录"：先抽样叶子字段，再按固定公式算派生字段。
//! 税务参数是不可变配置，不用全局常量

use crate::models::money::Money;
use crate::models::profile::{FieldRole, RoleBinding};
use crate::models::record::{FieldValue, Record};
use crate::services::data_sampler::DataSampler;

/// 税务参数
///
/// 按辖区可变，生成器只读
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxParams {
    /// 标准扣除额
    pub standard_deduction: Money,
    /// 税率（整数百分比）
    pub tax_rate_percent: u32,
}

impl Default for TaxParams {
    fn default() -> Self {
        Self {
            standard_deduction: Money::from_dollars(10_350),
            tax_rate_percent: 10,
        }
    }
}

/// 记录生成器
///
/// 职责：
/// - 按角色绑定抽样叶子字段
/// - 按固定顺序计算派生字段
/// - 不碰 PDF，不碰文件
pub struct RecordGenerator {
    params: TaxParams,
}

impl RecordGenerator {
    /// 创建记录生成器
    pub fn new(params: TaxParams) -> Self {
        Self { params }
    }

    /// 生成一条完整记录
    ///
    /// 先写入全部抽样字段（按表单出现顺序），再写入派生字段，
    /// 插入顺序即 CSV 列顺序
    pub fn generate(&self, binding: &RoleBinding, sampler: &mut DataSampler) -> Record {
        let wages = sampler.dollars_between(1_000, 100_000);
        let taxable_interest = sampler.dollars_between(0, 1_500);
        let unemployment_comp = sampler.dollars_between(0, 10_000);
        let tax_withheld = sampler.dollars_between(0, 10_000);
        let earned_income_credit = sampler.dollars_between(0, 2_000);
        let health_care = sampler.dollars_between(0, 1_000);

        let mut record = Record::new();

        // ========== 抽样字段 ==========
        record.insert(
            binding.field(FieldRole::FirstName),
            FieldValue::Text(sampler.first_name()),
        );
        record.insert(
            binding.field(FieldRole::LastName),
            FieldValue::Text(sampler.last_name()),
        );
        record.insert(binding.field(FieldRole::Ssn), FieldValue::Text(sampler.ssn()));
        record.insert(
            binding.field(FieldRole::StreetAddress),
            FieldValue::Text(sampler.street_address()),
        );
        record.insert(
            binding.field(FieldRole::AptNumber),
            FieldValue::Text(sampler.building_number()),
        );
        record.insert(
            binding.field(FieldRole::CityStateZip),
            FieldValue::Text(sampler.city_state_zip()),
        );
        record.insert(binding.field(FieldRole::Wages), FieldValue::Amount(wages));
        record.insert(
            binding.field(FieldRole::TaxableInterest),
            FieldValue::Amount(taxable_interest),
        );
        record.insert(
            binding.field(FieldRole::UnemploymentComp),
            FieldValue::Amount(unemployment_comp),
        );
        record.insert(
            binding.field(FieldRole::StandardDeduction),
            FieldValue::Amount(self.params.standard_deduction),
        );
        record.insert(
            binding.field(FieldRole::TaxWithheld),
            FieldValue::Amount(tax_withheld),
        );
        record.insert(
            binding.field(FieldRole::EarnedIncomeCredit),
            FieldValue::Amount(earned_income_credit),
        );
        record.insert(
            binding.field(FieldRole::HealthCare),
            FieldValue::Amount(health_care),
        );
        record.insert(
            binding.field(FieldRole::RoutingNumber),
            FieldValue::Count(sampler.digit_run(9)),
        );
        record.insert(
            binding.field(FieldRole::AccountNumber),
            FieldValue::Count(sampler.digit_run(12)),
        );
        record.insert(
            binding.field(FieldRole::Occupation),
            FieldValue::Text(sampler.occupation()),
        );
        record.insert(
            binding.field(FieldRole::Phone),
            FieldValue::Text(sampler.phone_number()),
        );

        // ========== 派生字段 ==========
        // 计算顺序固定：毛收入 → 应税收入 → 税额 → 已付总额 → 应缴总额 → 退税/欠税，
        // 负的中间结果一律收敛到零
        let gross = wages + taxable_interest + unemployment_comp;
        let taxable_income = gross.sub_or_zero(self.params.standard_deduction);
        let tax = taxable_income.percent(self.params.tax_rate_percent);
        let total_payments = tax_withheld + earned_income_credit;
        let total_tax = tax + health_care;
        let refund = total_payments.sub_or_zero(total_tax);
        let owed = total_tax.sub_or_zero(total_payments);

        record.insert(
            binding.field(FieldRole::GrossIncome),
            FieldValue::Amount(gross),
        );
        record.insert(
            binding.field(FieldRole::TaxableIncome),
            FieldValue::Amount(taxable_income),
        );
        record.insert(
            binding.field(FieldRole::TotalPayments),
            FieldValue::Amount(total_payments),
        );
        record.insert(binding.field(FieldRole::Tax), FieldValue::Amount(tax));
        record.insert(
            binding.field(FieldRole::TotalTax),
            FieldValue::Amount(total_tax),
        );
        record.insert(binding.field(FieldRole::Refund), FieldValue::Amount(refund));
        record.insert(
            binding.field(FieldRole::AmountOwed),
            FieldValue::Amount(owed),
        );

        record
    }
}
