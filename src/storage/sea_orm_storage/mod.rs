//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod files;
mod grades;
mod ratings;
mod users;
mod vendors;

use crate::config::AppConfig;
use crate::errors::{Result, VendorSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| VendorSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| VendorSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| VendorSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(VendorSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use std::collections::HashMap;

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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 文件模块
    async fn upload_file(
        &self,
        file_token: &str,
        file_name: &str,
        file_size: &i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File> {
        self.upload_file_impl(file_token, file_name, file_size, file_type, user_id)
            .await
    }

    async fn get_file_by_token(&self, file_token: &str) -> Result<Option<File>> {
        self.get_file_by_token_impl(file_token).await
    }

    async fn attach_file_to_document(&self, file_token: &str, document_id: i64) -> Result<bool> {
        self.attach_file_to_document_impl(file_token, document_id)
            .await
    }

    // 供应商模块
    async fn create_vendor(&self, user_id: i64, req: CreateVendorRequest) -> Result<Vendor> {
        self.create_vendor_impl(user_id, req).await
    }

    async fn get_vendor_by_id(&self, vendor_id: i64) -> Result<Option<Vendor>> {
        self.get_vendor_by_id_impl(vendor_id).await
    }

    async fn get_vendor_by_user_id(&self, user_id: i64) -> Result<Option<Vendor>> {
        self.get_vendor_by_user_id_impl(user_id).await
    }

    async fn list_vendors_with_pagination(
        &self,
        query: VendorListQuery,
    ) -> Result<VendorListResponse> {
        self.list_vendors_with_pagination_impl(query).await
    }

    async fn list_vendor_references(&self, vendor_id: i64) -> Result<Vec<VendorReference>> {
        self.list_vendor_references_impl(vendor_id).await
    }

    async fn list_vendor_contacts(&self, vendor_id: i64) -> Result<Vec<VendorContact>> {
        self.list_vendor_contacts_impl(vendor_id).await
    }

    async fn list_vendor_documents(&self, vendor_id: i64) -> Result<Vec<VendorDocument>> {
        self.list_vendor_documents_impl(vendor_id).await
    }

    async fn list_vendor_documents_with_files(
        &self,
        vendor_id: i64,
    ) -> Result<Vec<VendorDocumentView>> {
        self.list_vendor_documents_with_files_impl(vendor_id).await
    }

    async fn get_vendor_document(
        &self,
        vendor_id: i64,
        document_id: i64,
    ) -> Result<Option<VendorDocument>> {
        self.get_vendor_document_impl(vendor_id, document_id).await
    }

    async fn update_vendor_form(
        &self,
        vendor_id: i64,
        update: UpdateVendorRequest,
    ) -> Result<Option<Vendor>> {
        self.update_vendor_form_impl(vendor_id, update).await
    }

    async fn submit_vendor(&self, vendor_id: i64) -> Result<Option<Vendor>> {
        self.submit_vendor_impl(vendor_id).await
    }

    async fn recompute_vendor_completion(&self, vendor_id: i64) -> Result<Option<Vendor>> {
        self.recompute_vendor_completion_impl(vendor_id).await
    }

    // 评审分配模块
    async fn create_assignment(
        &self,
        vendor_id: i64,
        section: Section,
        reviewer_id: i64,
        assigned_by: i64,
    ) -> Result<ReviewerAssignment> {
        self.create_assignment_impl(vendor_id, section, reviewer_id, assigned_by)
            .await
    }

    async fn get_assignment_by_id(
        &self,
        assignment_id: i64,
    ) -> Result<Option<ReviewerAssignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn find_assignment(
        &self,
        vendor_id: i64,
        section: Section,
        reviewer_id: i64,
    ) -> Result<Option<ReviewerAssignment>> {
        self.find_assignment_impl(vendor_id, section, reviewer_id)
            .await
    }

    async fn list_assignments_for_vendor(
        &self,
        vendor_id: i64,
    ) -> Result<Vec<ReviewerAssignment>> {
        self.list_assignments_for_vendor_impl(vendor_id).await
    }

    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool> {
        self.delete_assignment_impl(assignment_id).await
    }

    // 评分与成绩模块
    async fn insert_ratings_and_recompute(
        &self,
        vendor_id: i64,
        section: Section,
        reviewer_id: i64,
        ratings: HashMap<String, u8>,
    ) -> Result<VendorGrade> {
        self.insert_ratings_and_recompute_impl(vendor_id, section, reviewer_id, ratings)
            .await
    }

    async fn latest_section_ratings(
        &self,
        vendor_id: i64,
        section: Section,
    ) -> Result<HashMap<String, i32>> {
        self.latest_section_ratings_impl(vendor_id, section).await
    }

    async fn get_grade_by_vendor_id(&self, vendor_id: i64) -> Result<Option<VendorGrade>> {
        self.get_grade_by_vendor_id_impl(vendor_id).await
    }

    async fn recompute_grade(&self, vendor_id: i64) -> Result<VendorGrade> {
        self.recompute_grade_impl(vendor_id).await
    }

    async fn set_grade_override(
        &self,
        vendor_id: i64,
        grade: Option<GradeLetter>,
        admin_id: i64,
    ) -> Result<Option<VendorGrade>> {
        self.set_grade_override_impl(vendor_id, grade, admin_id)
            .await
    }

    async fn list_rankings(&self) -> Result<Vec<RankingEntry>> {
        self.list_rankings_impl().await
    }
}
