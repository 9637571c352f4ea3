//! 供应商表单存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::files::{Column as FileColumn, Entity as Files};
use crate::entity::vendor_contacts::{
    ActiveModel as ContactActiveModel, Column as ContactColumn, Entity as VendorContacts,
};
use crate::entity::vendor_documents::{
    ActiveModel as DocumentActiveModel, Column as DocumentColumn, Entity as VendorDocuments,
};
use crate::entity::vendor_references::{
    ActiveModel as ReferenceActiveModel, Column as ReferenceColumn, Entity as VendorReferences,
};
use crate::entity::vendors::{ActiveModel, Column, Entity as Vendors, Model as VendorModel};
use crate::errors::{Result, VendorSystemError};
use crate::grading::completion::{ContactSnapshot, DocumentSnapshot, ReferenceSnapshot};
use crate::grading::{VendorFormSnapshot, compute_completion};
use crate::models::{
    common::PaginationInfo,
    vendors::{
        entities::{Vendor, VendorContact, VendorDocument, VendorDocumentView, VendorReference,
            VendorStatus},
        requests::{CreateVendorRequest, UpdateVendorRequest, VendorListQuery},
        responses::VendorListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 建立空白草稿
    pub async fn create_vendor_impl(
        &self,
        user_id: i64,
        req: CreateVendorRequest,
    ) -> Result<Vendor> {
        let now = chrono::Utc::now().timestamp();

        // 新草稿只有公司名，完成度按同一公式起算
        let snapshot = VendorFormSnapshot {
            company_name: req.company_name.clone(),
            ..Default::default()
        };
        let completion = compute_completion(&snapshot) as i32;

        let model = ActiveModel {
            user_id: Set(user_id),
            company_name: Set(req.company_name),
            legal_status: Set(String::new()),
            registration_number: Set(String::new()),
            gst_number: Set(String::new()),
            pan_number: Set(String::new()),
            contact_email: Set(String::new()),
            contact_phone: Set(String::new()),
            address_line1: Set(String::new()),
            pin_code: Set(String::new()),
            district: Set(String::new()),
            state: Set(String::new()),
            turnover_fy1: Set(0.0),
            turnover_fy2: Set(0.0),
            turnover_fy3: Set(0.0),
            turnover_fy4: Set(0.0),
            bank_name: Set(String::new()),
            account_number: Set(String::new()),
            ifsc_code: Set(String::new()),
            branch: Set(String::new()),
            completion_percentage: Set(completion),
            status: Set(VendorStatus::Draft.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("创建供应商失败: {e}")))?;

        Ok(result.into_vendor())
    }

    /// 通过 ID 获取供应商
    pub async fn get_vendor_by_id_impl(&self, vendor_id: i64) -> Result<Option<Vendor>> {
        let result = Vendors::find_by_id(vendor_id)
            .one(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询供应商失败: {e}")))?;

        Ok(result.map(|m| m.into_vendor()))
    }

    /// 获取某账号名下的供应商
    pub async fn get_vendor_by_user_id_impl(&self, user_id: i64) -> Result<Option<Vendor>> {
        let result = Vendors::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询供应商失败: {e}")))?;

        Ok(result.map(|m| m.into_vendor()))
    }

    /// 分页列出供应商
    pub async fn list_vendors_with_pagination_impl(
        &self,
        query: VendorListQuery,
    ) -> Result<VendorListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Vendors::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::CompanyName.contains(&escaped));
        }

        // 状态筛选
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 供应商角色只能看到自己的表单
        if let Some(owner_user_id) = query.owner_user_id {
            select = select.filter(Column::UserId.eq(owner_user_id));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            VendorSystemError::database_operation(format!("查询供应商总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            VendorSystemError::database_operation(format!("查询供应商页数失败: {e}"))
        })?;

        let vendors = paginator.fetch_page(page - 1).await.map_err(|e| {
            VendorSystemError::database_operation(format!("查询供应商列表失败: {e}"))
        })?;

        Ok(VendorListResponse {
            items: vendors.into_iter().map(|m| m.into_vendor()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出参考业绩
    pub async fn list_vendor_references_impl(
        &self,
        vendor_id: i64,
    ) -> Result<Vec<VendorReference>> {
        let rows = VendorReferences::find()
            .filter(ReferenceColumn::VendorId.eq(vendor_id))
            .order_by_asc(ReferenceColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                VendorSystemError::database_operation(format!("查询参考业绩失败: {e}"))
            })?;

        Ok(rows.into_iter().map(|m| m.into_reference()).collect())
    }

    /// 列出联系人
    pub async fn list_vendor_contacts_impl(&self, vendor_id: i64) -> Result<Vec<VendorContact>> {
        let rows = VendorContacts::find()
            .filter(ContactColumn::VendorId.eq(vendor_id))
            .order_by_asc(ContactColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询联系人失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_contact()).collect())
    }

    /// 列出资质文件条目
    pub async fn list_vendor_documents_impl(&self, vendor_id: i64) -> Result<Vec<VendorDocument>> {
        let rows = VendorDocuments::find()
            .filter(DocumentColumn::VendorId.eq(vendor_id))
            .order_by_asc(DocumentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                VendorSystemError::database_operation(format!("查询资质文件条目失败: {e}"))
            })?;

        Ok(rows.into_iter().map(|m| m.into_document()).collect())
    }

    /// 列出资质文件条目及其已上传文件
    pub async fn list_vendor_documents_with_files_impl(
        &self,
        vendor_id: i64,
    ) -> Result<Vec<VendorDocumentView>> {
        let documents = VendorDocuments::find()
            .filter(DocumentColumn::VendorId.eq(vendor_id))
            .order_by_asc(DocumentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                VendorSystemError::database_operation(format!("查询资质文件条目失败: {e}"))
            })?;

        let doc_ids: Vec<i64> = documents.iter().map(|d| d.id).collect();
        let mut grouped: HashMap<i64, Vec<crate::models::files::entities::File>> = HashMap::new();
        if !doc_ids.is_empty() {
            let files = Files::find()
                .filter(FileColumn::DocumentId.is_in(doc_ids))
                .order_by_asc(FileColumn::UploadedAt)
                .all(&self.db)
                .await
                .map_err(|e| {
                    VendorSystemError::database_operation(format!("查询挂接文件失败: {e}"))
                })?;
            for file in files {
                if let Some(document_id) = file.document_id {
                    grouped.entry(document_id).or_default().push(file.into_file());
                }
            }
        }

        Ok(documents
            .into_iter()
            .map(|d| VendorDocumentView {
                files: grouped.remove(&d.id).unwrap_or_default(),
                id: d.id,
                kind: d.kind,
            })
            .collect())
    }

    /// 获取某供应商名下的资质文件条目
    pub async fn get_vendor_document_impl(
        &self,
        vendor_id: i64,
        document_id: i64,
    ) -> Result<Option<VendorDocument>> {
        let result = VendorDocuments::find_by_id(document_id)
            .filter(DocumentColumn::VendorId.eq(vendor_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                VendorSystemError::database_operation(format!("查询资质文件条目失败: {e}"))
            })?;

        Ok(result.map(|m| m.into_document()))
    }

    /// 保存表单：标量字段增量更新，子表整体替换，完成度同事务重算
    pub async fn update_vendor_form_impl(
        &self,
        vendor_id: i64,
        update: UpdateVendorRequest,
    ) -> Result<Option<Vendor>> {
        let txn = self.db.begin().await.map_err(|e| {
            VendorSystemError::database_operation(format!("开启事务失败: {e}"))
        })?;

        let existing = Vendors::find_by_id(vendor_id)
            .one(&txn)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询供应商失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(vendor_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(company_name) = update.company_name {
            model.company_name = Set(company_name);
        }
        if let Some(legal_status) = update.legal_status {
            model.legal_status = Set(legal_status);
        }
        if let Some(registration_number) = update.registration_number {
            model.registration_number = Set(registration_number);
        }
        if let Some(gst_number) = update.gst_number {
            model.gst_number = Set(gst_number);
        }
        if let Some(pan_number) = update.pan_number {
            model.pan_number = Set(pan_number);
        }
        if let Some(contact_email) = update.contact_email {
            model.contact_email = Set(contact_email);
        }
        if let Some(contact_phone) = update.contact_phone {
            model.contact_phone = Set(contact_phone);
        }
        if let Some(address_line1) = update.address_line1 {
            model.address_line1 = Set(address_line1);
        }
        if let Some(pin_code) = update.pin_code {
            model.pin_code = Set(pin_code);
        }
        if let Some(district) = update.district {
            model.district = Set(district);
        }
        if let Some(state) = update.state {
            model.state = Set(state);
        }
        if let Some(turnover_fy1) = update.turnover_fy1 {
            model.turnover_fy1 = Set(turnover_fy1);
        }
        if let Some(turnover_fy2) = update.turnover_fy2 {
            model.turnover_fy2 = Set(turnover_fy2);
        }
        if let Some(turnover_fy3) = update.turnover_fy3 {
            model.turnover_fy3 = Set(turnover_fy3);
        }
        if let Some(turnover_fy4) = update.turnover_fy4 {
            model.turnover_fy4 = Set(turnover_fy4);
        }
        if let Some(bank_name) = update.bank_name {
            model.bank_name = Set(bank_name);
        }
        if let Some(account_number) = update.account_number {
            model.account_number = Set(account_number);
        }
        if let Some(ifsc_code) = update.ifsc_code {
            model.ifsc_code = Set(ifsc_code);
        }
        if let Some(branch) = update.branch {
            model.branch = Set(branch);
        }

        model
            .update(&txn)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("更新供应商失败: {e}")))?;

        // 子表整体替换
        if let Some(references) = update.references {
            VendorReferences::delete_many()
                .filter(ReferenceColumn::VendorId.eq(vendor_id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    VendorSystemError::database_operation(format!("清除参考业绩失败: {e}"))
                })?;
            let rows: Vec<ReferenceActiveModel> = references
                .into_iter()
                .map(|r| ReferenceActiveModel {
                    vendor_id: Set(vendor_id),
                    company_name: Set(r.company_name),
                    po_date: Set(r.po_date),
                    po_value: Set(r.po_value),
                    contact_person: Set(r.contact_person),
                    contact_phone: Set(r.contact_phone),
                    ..Default::default()
                })
                .collect();
            if !rows.is_empty() {
                VendorReferences::insert_many(rows).exec(&txn).await.map_err(|e| {
                    VendorSystemError::database_operation(format!("写入参考业绩失败: {e}"))
                })?;
            }
        }

        if let Some(contacts) = update.contacts {
            VendorContacts::delete_many()
                .filter(ContactColumn::VendorId.eq(vendor_id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    VendorSystemError::database_operation(format!("清除联系人失败: {e}"))
                })?;
            let rows: Vec<ContactActiveModel> = contacts
                .into_iter()
                .map(|c| ContactActiveModel {
                    vendor_id: Set(vendor_id),
                    name: Set(c.name),
                    designation: Set(c.designation),
                    email: Set(c.email),
                    phone: Set(c.phone),
                    ..Default::default()
                })
                .collect();
            if !rows.is_empty() {
                VendorContacts::insert_many(rows).exec(&txn).await.map_err(|e| {
                    VendorSystemError::database_operation(format!("写入联系人失败: {e}"))
                })?;
            }
        }

        if let Some(documents) = update.documents {
            // 旧条目删除后，其挂接文件经外键动作回到未挂接状态
            VendorDocuments::delete_many()
                .filter(DocumentColumn::VendorId.eq(vendor_id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    VendorSystemError::database_operation(format!("清除资质文件条目失败: {e}"))
                })?;
            let rows: Vec<DocumentActiveModel> = documents
                .into_iter()
                .map(|d| DocumentActiveModel {
                    vendor_id: Set(vendor_id),
                    kind: Set(d.kind),
                    ..Default::default()
                })
                .collect();
            if !rows.is_empty() {
                VendorDocuments::insert_many(rows).exec(&txn).await.map_err(|e| {
                    VendorSystemError::database_operation(format!("写入资质文件条目失败: {e}"))
                })?;
            }
        }

        // 同事务内按最新表单内容重算完成度
        let updated = Vendors::find_by_id(vendor_id)
            .one(&txn)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询供应商失败: {e}")))?
            .ok_or_else(|| {
                VendorSystemError::database_operation("更新后供应商记录缺失".to_string())
            })?;
        let snapshot = self.load_form_snapshot(&txn, &updated).await?;
        let completion = compute_completion(&snapshot) as i32;

        Vendors::update_many()
            .col_expr(
                Column::CompletionPercentage,
                sea_orm::sea_query::Expr::value(completion),
            )
            .filter(Column::Id.eq(vendor_id))
            .exec(&txn)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("更新完成度失败: {e}")))?;

        txn.commit().await.map_err(|e| {
            VendorSystemError::database_operation(format!("提交事务失败: {e}"))
        })?;

        self.get_vendor_by_id_impl(vendor_id).await
    }

    /// 提交表单：锁定并将完成度置为 100
    pub async fn submit_vendor_impl(&self, vendor_id: i64) -> Result<Option<Vendor>> {
        let existing = Vendors::find_by_id(vendor_id)
            .one(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询供应商失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(vendor_id),
            status: Set(VendorStatus::Submitted.to_string()),
            completion_percentage: Set(100),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("提交供应商失败: {e}")))?;

        self.get_vendor_by_id_impl(vendor_id).await
    }

    /// 按当前表单内容重算完成度
    pub async fn recompute_vendor_completion_impl(
        &self,
        vendor_id: i64,
    ) -> Result<Option<Vendor>> {
        let Some(vendor) = Vendors::find_by_id(vendor_id)
            .one(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询供应商失败: {e}")))?
        else {
            return Ok(None);
        };

        let snapshot = self.load_form_snapshot(&self.db, &vendor).await?;
        let completion = compute_completion(&snapshot) as i32;
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(vendor_id),
            completion_percentage: Set(completion),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("更新完成度失败: {e}")))?;

        self.get_vendor_by_id_impl(vendor_id).await
    }

    /// 从 vendor 行与子表组装完成度计算快照
    async fn load_form_snapshot<C>(
        &self,
        conn: &C,
        vendor: &VendorModel,
    ) -> Result<VendorFormSnapshot>
    where
        C: ConnectionTrait,
    {
        let references = VendorReferences::find()
            .filter(ReferenceColumn::VendorId.eq(vendor.id))
            .all(conn)
            .await
            .map_err(|e| {
                VendorSystemError::database_operation(format!("查询参考业绩失败: {e}"))
            })?;

        let contacts = VendorContacts::find()
            .filter(ContactColumn::VendorId.eq(vendor.id))
            .all(conn)
            .await
            .map_err(|e| VendorSystemError::database_operation(format!("查询联系人失败: {e}")))?;

        let documents = VendorDocuments::find()
            .filter(DocumentColumn::VendorId.eq(vendor.id))
            .all(conn)
            .await
            .map_err(|e| {
                VendorSystemError::database_operation(format!("查询资质文件条目失败: {e}"))
            })?;

        let doc_ids: Vec<i64> = documents.iter().map(|d| d.id).collect();
        let mut file_counts: HashMap<i64, u32> = HashMap::new();
        if !doc_ids.is_empty() {
            let files = Files::find()
                .filter(FileColumn::DocumentId.is_in(doc_ids))
                .all(conn)
                .await
                .map_err(|e| {
                    VendorSystemError::database_operation(format!("查询挂接文件失败: {e}"))
                })?;
            for file in files {
                if let Some(document_id) = file.document_id {
                    *file_counts.entry(document_id).or_insert(0) += 1;
                }
            }
        }

        Ok(VendorFormSnapshot {
            company_name: vendor.company_name.clone(),
            legal_status: vendor.legal_status.clone(),
            registration_number: vendor.registration_number.clone(),
            gst_number: vendor.gst_number.clone(),
            pan_number: vendor.pan_number.clone(),
            contact_email: vendor.contact_email.clone(),
            contact_phone: vendor.contact_phone.clone(),
            address_line1: vendor.address_line1.clone(),
            pin_code: vendor.pin_code.clone(),
            district: vendor.district.clone(),
            state: vendor.state.clone(),
            turnover_fy1: vendor.turnover_fy1,
            turnover_fy2: vendor.turnover_fy2,
            turnover_fy3: vendor.turnover_fy3,
            turnover_fy4: vendor.turnover_fy4,
            bank_name: vendor.bank_name.clone(),
            account_number: vendor.account_number.clone(),
            ifsc_code: vendor.ifsc_code.clone(),
            branch: vendor.branch.clone(),
            references: references
                .into_iter()
                .map(|r| ReferenceSnapshot {
                    company_name: r.company_name,
                    po_date: r.po_date,
                })
                .collect(),
            contacts: contacts
                .into_iter()
                .map(|c| ContactSnapshot {
                    name: c.name,
                    email: c.email,
                })
                .collect(),
            documents: documents
                .iter()
                .map(|d| DocumentSnapshot {
                    attached_files: file_counts.get(&d.id).copied().unwrap_or(0),
                })
                .collect(),
        })
    }
}
