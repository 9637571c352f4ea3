//! 评审分配存储操作

use super::SeaOrmStorage;
use crate::entity::reviewer_assignments::{ActiveModel, Column, Entity as ReviewerAssignments};
use crate::errors::{Result, VendorSystemError};
use crate::grading::Section;
use crate::models::assignments::entities::ReviewerAssignment;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建评审分配
    pub async fn create_assignment_impl(
        &self,
        vendor_id: i64,
        section: Section,
        reviewer_id: i64,
        assigned_by: i64,
    ) -> Result<ReviewerAssignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            vendor_id: Set(vendor_id),
            section: Set(section.to_string()),
            reviewer_id: Set(reviewer_id),
            assigned_by: Set(assigned_by),
            assigned_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("创建评审分配失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取评审分配
    pub async fn get_assignment_by_id_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Option<ReviewerAssignment>> {
        let result = ReviewerAssignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询评审分配失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 查找某评审员在某供应商某板块上的分配
    pub async fn find_assignment_impl(
        &self,
        vendor_id: i64,
        section: Section,
        reviewer_id: i64,
    ) -> Result<Option<ReviewerAssignment>> {
        let result = ReviewerAssignments::find()
            .filter(Column::VendorId.eq(vendor_id))
            .filter(Column::Section.eq(section.to_string()))
            .filter(Column::ReviewerId.eq(reviewer_id))
            .one(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询评审分配失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 列出供应商的评审分配
    pub async fn list_assignments_for_vendor_impl(
        &self,
        vendor_id: i64,
    ) -> Result<Vec<ReviewerAssignment>> {
        let rows = ReviewerAssignments::find()
            .filter(Column::VendorId.eq(vendor_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询评审分配失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 删除评审分配
    pub async fn delete_assignment_impl(&self, assignment_id: i64) -> Result<bool> {
        let result = ReviewerAssignments::delete_by_id(assignment_id)
            .exec(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("删除评审分配失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
