//! 参数评分存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::ratings::{ActiveModel, Column, Entity as Ratings};
use crate::errors::{Result, VendorSystemError};
use crate::grading::Section;
use crate::models::grades::entities::VendorGrade;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait};

impl SeaOrmStorage {
    /// 整批落库评分并在同一事务内重算成绩
    pub async fn insert_ratings_and_recompute_impl(
        &self,
        vendor_id: i64,
        section: Section,
        reviewer_id: i64,
        ratings: HashMap<String, u8>,
    ) -> Result<VendorGrade> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();

        let rows: Vec<ActiveModel> = ratings
            .into_iter()
            .map(|(parameter_key, value)| ActiveModel {
                vendor_id: Set(vendor_id),
                section: Set(section.to_string()),
                parameter_key: Set(parameter_key),
                reviewer_id: Set(reviewer_id),
                value: Set(value as i32),
                rated_at: Set(now),
                ..Default::default()
            })
            .collect();
        if !rows.is_empty() {
            Ratings::insert_many(rows).exec(&txn).await.map_err(|e| {
                VendorSystemError::database_operation(format!("写入评分失败: {e}"))
            })?;
        }

        let grade = self.recompute_grade_with_conn(&txn, vendor_id).await?;

        txn.commit()
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(grade)
    }

    /// 板块评分快照：每个参数取最新一次评分（同时刻取后写入的）
    pub async fn latest_section_ratings_impl(
        &self,
        vendor_id: i64,
        section: Section,
    ) -> Result<HashMap<String, i32>> {
        let rows = Ratings::find()
            .filter(Column::VendorId.eq(vendor_id))
            .filter(Column::Section.eq(section.to_string()))
            .order_by_asc(Column::RatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询评分失败: {e}")))?;

        let mut latest = HashMap::new();
        for row in rows {
            latest.insert(row.parameter_key, row.value);
        }
        Ok(latest)
    }

    /// 供应商全部板块的最新评分快照
    pub(crate) async fn latest_ratings_by_section<C>(
        &self,
        conn: &C,
        vendor_id: i64,
    ) -> Result<HashMap<Section, HashMap<String, u8>>>
    where
        C: ConnectionTrait,
    {
        let rows = Ratings::find()
            .filter(Column::VendorId.eq(vendor_id))
            .order_by_asc(Column::RatedAt)
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询评分失败: {e}")))?;

        let mut by_section: HashMap<Section, HashMap<String, u8>> = HashMap::new();
        for row in rows {
            let Ok(section) = row.section.parse::<Section>() else {
                continue;
            };
            by_section
                .entry(section)
                .or_default()
                .insert(row.parameter_key, row.value as u8);
        }
        Ok(by_section)
    }
}
