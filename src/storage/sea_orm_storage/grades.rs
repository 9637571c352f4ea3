//! 供应商成绩存储操作

use super::SeaOrmStorage;
use crate::entity::vendor_grades::{
    ActiveModel, Column, Entity as VendorGrades, Model as VendorGradeModel,
};
use crate::entity::vendors::Entity as Vendors;
use crate::errors::{Result, VendorSystemError};
use crate::grading::{GradeLetter, Section, compute_grade};
use crate::models::grades::{entities::VendorGrade, responses::RankingEntry};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 获取供应商成绩
    pub async fn get_grade_by_vendor_id_impl(&self, vendor_id: i64) -> Result<Option<VendorGrade>> {
        let result = VendorGrades::find_by_id(vendor_id)
            .one(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 按当前评分重算成绩
    pub async fn recompute_grade_impl(&self, vendor_id: i64) -> Result<VendorGrade> {
        self.recompute_grade_with_conn(&self.db, vendor_id).await
    }

    /// 设置或清除管理员成绩覆盖（只改覆盖字段）
    pub async fn set_grade_override_impl(
        &self,
        vendor_id: i64,
        grade: Option<GradeLetter>,
        admin_id: i64,
    ) -> Result<Option<VendorGrade>> {
        let existing = VendorGrades::find_by_id(vendor_id)
            .one(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询成绩失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = match grade {
            Some(letter) => ActiveModel {
                vendor_id: Set(vendor_id),
                admin_override_grade: Set(Some(letter.to_string())),
                overridden_by: Set(Some(admin_id)),
                overridden_at: Set(Some(now)),
                ..Default::default()
            },
            None => ActiveModel {
                vendor_id: Set(vendor_id),
                admin_override_grade: Set(None),
                overridden_by: Set(None),
                overridden_at: Set(None),
                ..Default::default()
            },
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("更新成绩覆盖失败: {e}")))?;

        self.get_grade_by_vendor_id_impl(vendor_id).await
    }

    /// 排行榜：总分降序，同分按最近重算时间优先
    pub async fn list_rankings_impl(&self) -> Result<Vec<RankingEntry>> {
        let rows = VendorGrades::find()
            .find_also_related(Vendors)
            .order_by_desc(Column::TotalScore)
            .order_by_desc(Column::ComputedAt)
            .all(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询排行榜失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(grade, vendor)| {
                let vendor = vendor?;
                let grade = grade.into_grade();
                Some(RankingEntry {
                    vendor_id: grade.vendor_id,
                    company_name: vendor.company_name,
                    site_score: grade.site_score,
                    procurement_score: grade.procurement_score,
                    financial_score: grade.financial_score,
                    total_score: grade.total_score,
                    grade_label: grade.final_grade.label().to_string(),
                    final_grade: grade.final_grade,
                    computed_at: grade.computed_at,
                })
            })
            .collect())
    }

    /// 按最新评分重算分数与计算档位，覆盖字段原样保留
    pub(crate) async fn recompute_grade_with_conn<C>(
        &self,
        conn: &C,
        vendor_id: i64,
    ) -> Result<VendorGrade>
    where
        C: ConnectionTrait,
    {
        let mut by_section = self.latest_ratings_by_section(conn, vendor_id).await?;
        let site = by_section.remove(&Section::Site).unwrap_or_default();
        let procurement = by_section.remove(&Section::Procurement).unwrap_or_default();
        let financial = by_section.remove(&Section::Financial).unwrap_or_default();

        let computation = compute_grade(&site, &procurement, &financial);
        let now = chrono::Utc::now().timestamp();

        let existing: Option<VendorGradeModel> = VendorGrades::find_by_id(vendor_id)
            .one(conn)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        let updated = match existing {
            Some(_) => {
                let model = ActiveModel {
                    vendor_id: Set(vendor_id),
                    site_score: Set(computation.site_score),
                    procurement_score: Set(computation.procurement_score),
                    financial_score: Set(computation.financial_score),
                    total_score: Set(computation.total_score),
                    computed_grade: Set(computation.computed_grade.to_string()),
                    computed_at: Set(now),
                    ..Default::default()
                };
                model.update(conn).await.map_err(|e| {
                    VendorSystemError::database_operation(format!("更新成绩失败: {e}"))
                })?
            }
            None => {
                let model = ActiveModel {
                    vendor_id: Set(vendor_id),
                    site_score: Set(computation.site_score),
                    procurement_score: Set(computation.procurement_score),
                    financial_score: Set(computation.financial_score),
                    total_score: Set(computation.total_score),
                    computed_grade: Set(computation.computed_grade.to_string()),
                    admin_override_grade: Set(None),
                    computed_at: Set(now),
                    overridden_by: Set(None),
                    overridden_at: Set(None),
                };
                model.insert(conn).await.map_err(|e| {
                    VendorSystemError::database_operation(format!("写入成绩失败: {e}"))
                })?
            }
        };

        Ok(updated.into_grade())
    }
}
