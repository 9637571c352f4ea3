//! 分部得分与综合评级
//!
//! 纯函数实现：分部得分 = Σ (评分值/5) × 参数权重，缺失参数按 0 计；
//! 综合得分为三个分部得分之和，按固定阈值降序映射到 A–D 评级。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::catalog::{self, Section};

/// 保留两位小数，四舍五入，只在求和完成后调用一次
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 计算单个分部得分
///
/// ratings 中缺失的参数按 0 分计入，得分自然落在 [0, 分部权重] 区间。
/// 调用方保证值已通过 [`validate_rating_batch`] 校验。
pub fn compute_section_score(section: Section, ratings: &HashMap<String, u8>) -> f64 {
    let mut score = 0.0;
    for parameter in catalog::parameters(section) {
        if let Some(&value) = ratings.get(parameter.key) {
            score += (value as f64 / 5.0) * parameter.weight;
        }
    }
    round2(score)
}

/// 分部是否已评完（每个参数都有 1..=5 的值）
///
/// 只用于控制评分提交入口，不参与得分公式。
pub fn is_section_complete(section: Section, ratings: &HashMap<String, u8>) -> bool {
    catalog::parameters(section)
        .iter()
        .all(|p| matches!(ratings.get(p.key), Some(v) if (1..=5).contains(v)))
}

// 评级字母
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub enum GradeLetter {
    A,
    B,
    C,
    D,
}

impl GradeLetter {
    /// 评级标签，用于排行与报表展示
    pub fn label(&self) -> &'static str {
        match self {
            GradeLetter::A => "Strategic Vendor",
            GradeLetter::B => "Approved Vendor",
            GradeLetter::C => "Conditional Vendor",
            GradeLetter::D => "High-Risk Vendor",
        }
    }

    /// 准入提示
    pub fn gate_note(&self) -> &'static str {
        match self {
            GradeLetter::A => "Strong financials",
            GradeLetter::B => "Acceptable",
            GradeLetter::C => "Financial watchlist",
            GradeLetter::D => "Avoid / short-term only",
        }
    }
}

impl<'de> Deserialize<'de> for GradeLetter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!("无效的评级字母: '{s}'. 支持的评级: A, B, C, D"))
        })
    }
}

impl std::fmt::Display for GradeLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeLetter::A => write!(f, "A"),
            GradeLetter::B => write!(f, "B"),
            GradeLetter::C => write!(f, "C"),
            GradeLetter::D => write!(f, "D"),
        }
    }
}

impl std::str::FromStr for GradeLetter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(GradeLetter::A),
            "B" => Ok(GradeLetter::B),
            "C" => Ok(GradeLetter::C),
            "D" => Ok(GradeLetter::D),
            _ => Err(format!("Invalid grade letter: {s}")),
        }
    }
}

/// 综合得分到评级的映射，阈值按降序逐条判定，先命中者生效
pub fn grade_for_total(total_score: f64) -> GradeLetter {
    if total_score >= 85.0 {
        GradeLetter::A
    } else if total_score >= 70.0 {
        GradeLetter::B
    } else if total_score >= 55.0 {
        GradeLetter::C
    } else {
        GradeLetter::D
    }
}

// 综合评级结果
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct GradeComputation {
    pub site_score: f64,
    pub procurement_score: f64,
    pub financial_score: f64,
    pub total_score: f64,
    pub computed_grade: GradeLetter,
}

/// 由三个分部的评分集合计算综合评级
///
/// 相同输入总是产生相同输出，评分提交后在同一事务内重算。
pub fn compute_grade(
    site_ratings: &HashMap<String, u8>,
    procurement_ratings: &HashMap<String, u8>,
    financial_ratings: &HashMap<String, u8>,
) -> GradeComputation {
    let site_score = compute_section_score(Section::Site, site_ratings);
    let procurement_score = compute_section_score(Section::Procurement, procurement_ratings);
    let financial_score = compute_section_score(Section::Financial, financial_ratings);
    let total_score = round2(site_score + procurement_score + financial_score);
    GradeComputation {
        site_score,
        procurement_score,
        financial_score,
        total_score,
        computed_grade: grade_for_total(total_score),
    }
}

// 评分批次校验失败原因
#[derive(Debug, Clone, PartialEq)]
pub enum RatingBatchError {
    /// 分部内不存在该参数 key
    UnknownParameter { key: String },
    /// 评分值不是 1..=5 的整数
    InvalidRatingValue { key: String, value: i64 },
}

/// 校验一批待提交评分，整批通过或整批拒绝
///
/// 任何一个 key 不属于该分部、或任何一个值不在 1..=5 内，
/// 都会使整批校验失败，调用方不得写入其中任何一条。
pub fn validate_rating_batch(
    section: Section,
    raw: &HashMap<String, i64>,
) -> Result<HashMap<String, u8>, RatingBatchError> {
    let mut validated = HashMap::with_capacity(raw.len());
    for (key, &value) in raw {
        if catalog::find_parameter(section, key).is_none() {
            return Err(RatingBatchError::UnknownParameter { key: key.clone() });
        }
        if !(1..=5).contains(&value) {
            return Err(RatingBatchError::InvalidRatingValue {
                key: key.clone(),
                value,
            });
        }
        validated.insert(key.clone(), value as u8);
    }
    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_rated(section: Section, value: u8) -> HashMap<String, u8> {
        catalog::parameters(section)
            .iter()
            .map(|p| (p.key.to_string(), value))
            .collect()
    }

    #[test]
    fn test_empty_ratings_score_zero() {
        for &section in Section::all() {
            assert_eq!(compute_section_score(section, &HashMap::new()), 0.0);
        }
    }

    #[test]
    fn test_section_score_bounds() {
        for &section in Section::all() {
            for value in 1..=5u8 {
                let score = compute_section_score(section, &all_rated(section, value));
                assert!(score >= 0.0 && score <= section.weight());
            }
        }
    }

    #[test]
    fn test_full_marks_equal_section_weight() {
        assert_eq!(
            compute_section_score(Section::Site, &all_rated(Section::Site, 5)),
            45.0
        );
        assert_eq!(
            compute_section_score(Section::Procurement, &all_rated(Section::Procurement, 5)),
            30.0
        );
        assert_eq!(
            compute_section_score(Section::Financial, &all_rated(Section::Financial, 5)),
            25.0
        );
    }

    #[test]
    fn test_raising_one_rating_never_lowers_score() {
        let mut ratings = all_rated(Section::Procurement, 3);
        let base = compute_section_score(Section::Procurement, &ratings);
        for parameter in catalog::parameters(Section::Procurement) {
            let mut bumped = ratings.clone();
            bumped.insert(parameter.key.to_string(), 4);
            assert!(compute_section_score(Section::Procurement, &bumped) >= base);
        }
        ratings.insert("data_sharing".to_string(), 5);
        assert!(compute_section_score(Section::Procurement, &ratings) >= base);
    }

    #[test]
    fn test_partial_ratings_count_missing_as_zero() {
        let mut ratings = HashMap::new();
        ratings.insert("material_timely_delivery".to_string(), 5u8);
        // 只有 10 分权重的参数得满分，其余按 0 计
        assert_eq!(compute_section_score(Section::Site, &ratings), 10.0);
        assert!(!is_section_complete(Section::Site, &ratings));
    }

    #[test]
    fn test_section_complete_requires_every_parameter() {
        let ratings = all_rated(Section::Financial, 3);
        assert!(is_section_complete(Section::Financial, &ratings));
        let mut missing_one = ratings.clone();
        missing_one.remove("cash_flow_health");
        assert!(!is_section_complete(Section::Financial, &missing_one));
    }

    #[test]
    fn test_grade_thresholds_descending_first_match() {
        assert_eq!(grade_for_total(100.0), GradeLetter::A);
        assert_eq!(grade_for_total(85.0), GradeLetter::A);
        assert_eq!(grade_for_total(84.99), GradeLetter::B);
        assert_eq!(grade_for_total(70.0), GradeLetter::B);
        assert_eq!(grade_for_total(69.99), GradeLetter::C);
        assert_eq!(grade_for_total(55.0), GradeLetter::C);
        assert_eq!(grade_for_total(54.99), GradeLetter::D);
        assert_eq!(grade_for_total(0.0), GradeLetter::D);
    }

    #[test]
    fn test_grade_labels() {
        assert_eq!(GradeLetter::A.label(), "Strategic Vendor");
        assert_eq!(GradeLetter::B.label(), "Approved Vendor");
        assert_eq!(GradeLetter::C.label(), "Conditional Vendor");
        assert_eq!(GradeLetter::D.label(), "High-Risk Vendor");
        assert_eq!(GradeLetter::D.gate_note(), "Avoid / short-term only");
    }

    #[test]
    fn test_compute_grade_combined_scenario() {
        // 现场全 5 分 45.00，采购全 3 分 18.00，财务全 1 分 5.00
        let computation = compute_grade(
            &all_rated(Section::Site, 5),
            &all_rated(Section::Procurement, 3),
            &all_rated(Section::Financial, 1),
        );
        assert_eq!(computation.site_score, 45.0);
        assert_eq!(computation.procurement_score, 18.0);
        assert_eq!(computation.financial_score, 5.0);
        assert_eq!(computation.total_score, 68.0);
        assert_eq!(computation.computed_grade, GradeLetter::C);
    }

    #[test]
    fn test_compute_grade_idempotent() {
        let site = all_rated(Section::Site, 4);
        let procurement = all_rated(Section::Procurement, 2);
        let financial = all_rated(Section::Financial, 5);
        let first = compute_grade(&site, &procurement, &financial);
        let second = compute_grade(&site, &procurement, &financial);
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_score_bounds() {
        let min = compute_grade(&HashMap::new(), &HashMap::new(), &HashMap::new());
        assert_eq!(min.total_score, 0.0);
        assert_eq!(min.computed_grade, GradeLetter::D);
        let max = compute_grade(
            &all_rated(Section::Site, 5),
            &all_rated(Section::Procurement, 5),
            &all_rated(Section::Financial, 5),
        );
        assert_eq!(max.total_score, 100.0);
        assert_eq!(max.computed_grade, GradeLetter::A);
    }

    #[test]
    fn test_validate_rating_batch_accepts_valid() {
        let mut raw = HashMap::new();
        raw.insert("revenue_trend".to_string(), 4i64);
        raw.insert("cash_flow_health".to_string(), 1i64);
        let validated = validate_rating_batch(Section::Financial, &raw).unwrap();
        assert_eq!(validated.get("revenue_trend"), Some(&4u8));
        assert_eq!(validated.len(), 2);
    }

    #[test]
    fn test_validate_rating_batch_unknown_key_rejects_whole_batch() {
        let mut raw = HashMap::new();
        raw.insert("material_timely_delivery".to_string(), 5i64);
        raw.insert("nonexistent_param".to_string(), 3i64);
        let err = validate_rating_batch(Section::Site, &raw).unwrap_err();
        assert_eq!(
            err,
            RatingBatchError::UnknownParameter {
                key: "nonexistent_param".to_string()
            }
        );
    }

    #[test]
    fn test_validate_rating_batch_rejects_key_from_other_section() {
        let mut raw = HashMap::new();
        raw.insert("revenue_trend".to_string(), 3i64);
        assert!(matches!(
            validate_rating_batch(Section::Site, &raw),
            Err(RatingBatchError::UnknownParameter { .. })
        ));
    }

    #[test]
    fn test_validate_rating_batch_out_of_range_value() {
        for bad in [0i64, 6, -1, 100] {
            let mut raw = HashMap::new();
            raw.insert("data_sharing".to_string(), bad);
            let err = validate_rating_batch(Section::Procurement, &raw).unwrap_err();
            assert_eq!(
                err,
                RatingBatchError::InvalidRatingValue {
                    key: "data_sharing".to_string(),
                    value: bad
                }
            );
        }
    }
}
