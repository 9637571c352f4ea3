use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评分分部
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub enum Section {
    Site,        // 现场执行
    Procurement, // 采购协作
    Financial,   // 财务状况
}

impl Section {
    pub const SITE: &'static str = "site";
    pub const PROCUREMENT: &'static str = "procurement";
    pub const FINANCIAL: &'static str = "financial";

    pub fn all() -> &'static [Section] {
        &[Section::Site, Section::Procurement, Section::Financial]
    }

    /// 分部权重占比，三个分部合计 100
    pub fn weight(&self) -> f64 {
        match self {
            Section::Site => 45.0,
            Section::Procurement => 30.0,
            Section::Financial => 25.0,
        }
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Section::SITE => Ok(Section::Site),
            Section::PROCUREMENT => Ok(Section::Procurement),
            Section::FINANCIAL => Ok(Section::Financial),
            _ => Err(serde::de::Error::custom(format!(
                "无效的评分分部: '{s}'. 支持的分部: site, procurement, financial"
            ))),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Site => write!(f, "{}", Section::SITE),
            Section::Procurement => write!(f, "{}", Section::PROCUREMENT),
            Section::Financial => write!(f, "{}", Section::FINANCIAL),
        }
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "site" => Ok(Section::Site),
            "procurement" => Ok(Section::Procurement),
            "financial" => Ok(Section::Financial),
            _ => Err(format!("Invalid grading section: {s}")),
        }
    }
}

// 评分参数定义（静态目录，不落库）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct GradingParameter {
    pub key: &'static str,
    pub section: Section,
    pub weight: f64,
    pub name: &'static str,
    pub description: &'static str,
    pub ordinal: u32,
}

const fn param(
    key: &'static str,
    section: Section,
    weight: f64,
    name: &'static str,
    description: &'static str,
    ordinal: u32,
) -> GradingParameter {
    GradingParameter {
        key,
        section,
        weight,
        name,
        description,
        ordinal,
    }
}

/// 现场分部参数，权重合计 45
static SITE_PARAMETERS: &[GradingParameter] = &[
    param(
        "material_timely_delivery",
        Section::Site,
        10.0,
        "物料按时交付",
        "物料、设备按合同节点到场的及时程度",
        1,
    ),
    param(
        "support_at_site",
        Section::Site,
        7.0,
        "现场配合支持",
        "对现场施工与调试的人员配合程度",
        2,
    ),
    param(
        "execution_time",
        Section::Site,
        7.0,
        "执行周期",
        "实际执行周期相对计划周期的表现",
        3,
    ),
    param(
        "safety_compliance",
        Section::Site,
        7.0,
        "安全合规",
        "现场安全规范与作业许可的遵守情况",
        4,
    ),
    param(
        "workmanship_quality",
        Section::Site,
        7.0,
        "工艺质量",
        "交付物的工艺水平与一次验收合格率",
        5,
    ),
    param(
        "planning_coordination",
        Section::Site,
        3.0,
        "计划协调",
        "进度计划编制与多方协调能力",
        6,
    ),
    param(
        "responsiveness_rectification",
        Section::Site,
        4.0,
        "整改响应",
        "对质量、安全问题整改的响应速度",
        7,
    ),
];

/// 采购分部参数，权重合计 30
static PROCUREMENT_PARAMETERS: &[GradingParameter] = &[
    param(
        "timely_response_rfq",
        Section::Procurement,
        5.0,
        "询价响应及时性",
        "对询价与澄清请求的响应速度",
        1,
    ),
    param(
        "negotiation_approach",
        Section::Procurement,
        5.0,
        "议价态度",
        "商务谈判中的专业性与合作态度",
        2,
    ),
    param(
        "data_sharing",
        Section::Procurement,
        5.0,
        "数据共享",
        "成本构成、产能等数据的透明程度",
        3,
    ),
    param(
        "flexibility_payment_terms",
        Section::Procurement,
        5.0,
        "付款条件灵活性",
        "对账期与付款方式的可协商程度",
        4,
    ),
    param(
        "timely_lc_bg_submission",
        Section::Procurement,
        5.0,
        "保函信用证提交及时性",
        "履约保函、信用证等单据的按时提交",
        5,
    ),
    param(
        "no_delivery_hold_payment",
        Section::Procurement,
        3.0,
        "不因付款扣押交付",
        "未因付款争议扣押在途交付的记录",
        6,
    ),
    param(
        "contractual_compliance",
        Section::Procurement,
        2.0,
        "合同合规",
        "合同条款的整体履约合规情况",
        7,
    ),
];

/// 财务分部参数，权重合计 25
static FINANCIAL_PARAMETERS: &[GradingParameter] = &[
    param(
        "revenue_trend",
        Section::Financial,
        6.0,
        "营收趋势",
        "近几个财年营业收入的变化趋势",
        1,
    ),
    param(
        "profitability_trend",
        Section::Financial,
        6.0,
        "盈利趋势",
        "净利润率的水平与变化趋势",
        2,
    ),
    param(
        "liquidity_position",
        Section::Financial,
        5.0,
        "流动性状况",
        "流动比率与短期偿付能力",
        3,
    ),
    param(
        "debt_solvency",
        Section::Financial,
        4.0,
        "偿债能力",
        "资产负债率与长期偿债能力",
        4,
    ),
    param(
        "cash_flow_health",
        Section::Financial,
        4.0,
        "现金流健康度",
        "经营性现金流的稳定性",
        5,
    ),
];

/// 返回某分部的全部参数，按 ordinal 升序
pub fn parameters(section: Section) -> &'static [GradingParameter] {
    match section {
        Section::Site => SITE_PARAMETERS,
        Section::Procurement => PROCUREMENT_PARAMETERS,
        Section::Financial => FINANCIAL_PARAMETERS,
    }
}

/// 按 key 在某分部内查找参数定义
pub fn find_parameter(section: Section, key: &str) -> Option<&'static GradingParameter> {
    parameters(section).iter().find(|p| p.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_weights_sum_to_100() {
        let sum: f64 = Section::all().iter().map(|s| s.weight()).sum();
        assert_eq!(sum, 100.0);
    }

    #[test]
    fn test_parameter_weights_match_section_weight() {
        for &section in Section::all() {
            let sum: f64 = parameters(section).iter().map(|p| p.weight).sum();
            assert_eq!(sum, section.weight(), "分部 {section} 权重不一致");
        }
    }

    #[test]
    fn test_parameter_keys_unique() {
        for &section in Section::all() {
            let params = parameters(section);
            for (i, p) in params.iter().enumerate() {
                assert!(
                    !params[i + 1..].iter().any(|q| q.key == p.key),
                    "重复的参数 key: {}",
                    p.key
                );
            }
        }
    }

    #[test]
    fn test_find_parameter() {
        let p = find_parameter(Section::Site, "material_timely_delivery").unwrap();
        assert_eq!(p.weight, 10.0);
        assert!(find_parameter(Section::Site, "revenue_trend").is_none());
        assert!(find_parameter(Section::Financial, "revenue_trend").is_some());
    }

    #[test]
    fn test_section_parse_and_display() {
        use std::str::FromStr;
        assert_eq!(Section::from_str("site").unwrap(), Section::Site);
        assert_eq!(Section::Procurement.to_string(), "procurement");
        assert!(Section::from_str("legal").is_err());
    }
}
