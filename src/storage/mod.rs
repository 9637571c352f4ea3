use std::collections::HashMap;
use std::sync::Arc;

use crate::grading::{GradeLetter, Section};
use crate::models::{
    assignments::entities::ReviewerAssignment,
    files::entities::File,
    grades::{entities::VendorGrade, responses::RankingEntry},
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
    vendors::{
        entities::{Vendor, VendorContact, VendorDocument, VendorDocumentView, VendorReference},
        requests::{CreateVendorRequest, UpdateVendorRequest, VendorListQuery},
        responses::VendorListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户总数
    async fn count_users(&self) -> Result<u64>;

    /// 文件管理方法
    // 上传文件
    async fn upload_file(
        &self,
        file_token: &str,
        file_name: &str,
        file_size: &i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File>;
    // 通过唯一 token 获取文件信息
    async fn get_file_by_token(&self, file_token: &str) -> Result<Option<File>>;
    // 将已上传文件挂接到资质文件条目
    async fn attach_file_to_document(&self, file_token: &str, document_id: i64) -> Result<bool>;

    /// 供应商表单方法
    // 建立空白草稿
    async fn create_vendor(&self, user_id: i64, req: CreateVendorRequest) -> Result<Vendor>;
    // 通过ID获取供应商表单
    async fn get_vendor_by_id(&self, vendor_id: i64) -> Result<Option<Vendor>>;
    // 获取某账号名下的供应商表单
    async fn get_vendor_by_user_id(&self, user_id: i64) -> Result<Option<Vendor>>;
    // 列出供应商
    async fn list_vendors_with_pagination(
        &self,
        query: VendorListQuery,
    ) -> Result<VendorListResponse>;
    // 列出参考业绩
    async fn list_vendor_references(&self, vendor_id: i64) -> Result<Vec<VendorReference>>;
    // 列出联系人
    async fn list_vendor_contacts(&self, vendor_id: i64) -> Result<Vec<VendorContact>>;
    // 列出资质文件条目
    async fn list_vendor_documents(&self, vendor_id: i64) -> Result<Vec<VendorDocument>>;
    // 列出资质文件条目及其已上传文件
    async fn list_vendor_documents_with_files(
        &self,
        vendor_id: i64,
    ) -> Result<Vec<VendorDocumentView>>;
    // 获取某供应商名下的资质文件条目
    async fn get_vendor_document(
        &self,
        vendor_id: i64,
        document_id: i64,
    ) -> Result<Option<VendorDocument>>;
    // 保存表单并重算完成度
    async fn update_vendor_form(
        &self,
        vendor_id: i64,
        update: UpdateVendorRequest,
    ) -> Result<Option<Vendor>>;
    // 提交表单（锁定，完成度置 100）
    async fn submit_vendor(&self, vendor_id: i64) -> Result<Option<Vendor>>;
    // 按当前表单内容重算完成度
    async fn recompute_vendor_completion(&self, vendor_id: i64) -> Result<Option<Vendor>>;

    /// 评审分配方法
    // 创建评审分配
    async fn create_assignment(
        &self,
        vendor_id: i64,
        section: Section,
        reviewer_id: i64,
        assigned_by: i64,
    ) -> Result<ReviewerAssignment>;
    // 通过ID获取评审分配
    async fn get_assignment_by_id(&self, assignment_id: i64)
    -> Result<Option<ReviewerAssignment>>;
    // 查找某评审员在某供应商某板块上的分配
    async fn find_assignment(
        &self,
        vendor_id: i64,
        section: Section,
        reviewer_id: i64,
    ) -> Result<Option<ReviewerAssignment>>;
    // 列出供应商的评审分配
    async fn list_assignments_for_vendor(&self, vendor_id: i64)
    -> Result<Vec<ReviewerAssignment>>;
    // 删除评审分配
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;

    /// 评分与成绩方法
    // 整批落库评分并重算成绩
    async fn insert_ratings_and_recompute(
        &self,
        vendor_id: i64,
        section: Section,
        reviewer_id: i64,
        ratings: HashMap<String, u8>,
    ) -> Result<VendorGrade>;
    // 板块评分快照（每个参数取最新一次评分）
    async fn latest_section_ratings(
        &self,
        vendor_id: i64,
        section: Section,
    ) -> Result<HashMap<String, i32>>;
    // 获取供应商成绩
    async fn get_grade_by_vendor_id(&self, vendor_id: i64) -> Result<Option<VendorGrade>>;
    // 按当前评分重算成绩
    async fn recompute_grade(&self, vendor_id: i64) -> Result<VendorGrade>;
    // 设置或清除管理员成绩覆盖
    async fn set_grade_override(
        &self,
        vendor_id: i64,
        grade: Option<GradeLetter>,
        admin_id: i64,
    ) -> Result<Option<VendorGrade>>;
    // 排行榜（总分降序，同分按最近重算时间优先）
    async fn list_rankings(&self) -> Result<Vec<RankingEntry>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
