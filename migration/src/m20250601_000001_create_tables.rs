use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::ProfileName).string().null())
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建供应商主表单表
        manager
            .create_table(
                Table::create()
                    .table(Vendors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vendors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vendors::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Vendors::CompanyName).string().not_null())
                    .col(ColumnDef::new(Vendors::LegalStatus).string().not_null())
                    .col(
                        ColumnDef::new(Vendors::RegistrationNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Vendors::GstNumber).string().not_null())
                    .col(ColumnDef::new(Vendors::PanNumber).string().not_null())
                    .col(ColumnDef::new(Vendors::ContactEmail).string().not_null())
                    .col(ColumnDef::new(Vendors::ContactPhone).string().not_null())
                    .col(ColumnDef::new(Vendors::AddressLine1).string().not_null())
                    .col(ColumnDef::new(Vendors::PinCode).string().not_null())
                    .col(ColumnDef::new(Vendors::District).string().not_null())
                    .col(ColumnDef::new(Vendors::State).string().not_null())
                    .col(
                        ColumnDef::new(Vendors::TurnoverFy1)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Vendors::TurnoverFy2)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Vendors::TurnoverFy3)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Vendors::TurnoverFy4)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Vendors::BankName).string().not_null())
                    .col(ColumnDef::new(Vendors::AccountNumber).string().not_null())
                    .col(ColumnDef::new(Vendors::IfscCode).string().not_null())
                    .col(ColumnDef::new(Vendors::Branch).string().not_null())
                    .col(
                        ColumnDef::new(Vendors::CompletionPercentage)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Vendors::Status).string().not_null())
                    .col(ColumnDef::new(Vendors::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Vendors::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Vendors::Table, Vendors::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建参考业绩表
        manager
            .create_table(
                Table::create()
                    .table(VendorReferences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VendorReferences::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VendorReferences::VendorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VendorReferences::CompanyName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VendorReferences::PoDate)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VendorReferences::PoValue).double().null())
                    .col(
                        ColumnDef::new(VendorReferences::ContactPerson)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(VendorReferences::ContactPhone)
                            .string()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(VendorReferences::Table, VendorReferences::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建联系人表
        manager
            .create_table(
                Table::create()
                    .table(VendorContacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VendorContacts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VendorContacts::VendorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VendorContacts::Name).string().not_null())
                    .col(
                        ColumnDef::new(VendorContacts::Designation)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(VendorContacts::Email).string().not_null())
                    .col(ColumnDef::new(VendorContacts::Phone).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(VendorContacts::Table, VendorContacts::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建资质文件条目表
        manager
            .create_table(
                Table::create()
                    .table(VendorDocuments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VendorDocuments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VendorDocuments::VendorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VendorDocuments::Kind).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(VendorDocuments::Table, VendorDocuments::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建文件表
        manager
            .create_table(
                Table::create()
                    .table(Files::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Files::FileToken)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Files::FileName).string().not_null())
                    .col(ColumnDef::new(Files::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(Files::FileType).string().not_null())
                    .col(ColumnDef::new(Files::UploadedAt).big_integer().not_null())
                    .col(ColumnDef::new(Files::DocumentId).big_integer().null())
                    .col(ColumnDef::new(Files::UserId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Files::Table, Files::DocumentId)
                            .to(VendorDocuments::Table, VendorDocuments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Files::Table, Files::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评审分配表
        manager
            .create_table(
                Table::create()
                    .table(ReviewerAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReviewerAssignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ReviewerAssignments::VendorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReviewerAssignments::Section)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReviewerAssignments::ReviewerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReviewerAssignments::AssignedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReviewerAssignments::AssignedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ReviewerAssignments::Table, ReviewerAssignments::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ReviewerAssignments::Table, ReviewerAssignments::ReviewerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建参数评分表
        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ratings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ratings::VendorId).big_integer().not_null())
                    .col(ColumnDef::new(Ratings::Section).string().not_null())
                    .col(ColumnDef::new(Ratings::ParameterKey).string().not_null())
                    .col(
                        ColumnDef::new(Ratings::ReviewerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Ratings::Value).integer().not_null())
                    .col(ColumnDef::new(Ratings::RatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Ratings::Table, Ratings::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Ratings::Table, Ratings::ReviewerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建供应商成绩表
        manager
            .create_table(
                Table::create()
                    .table(VendorGrades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VendorGrades::VendorId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VendorGrades::SiteScore)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(VendorGrades::ProcurementScore)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(VendorGrades::FinancialScore)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(VendorGrades::TotalScore)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(VendorGrades::ComputedGrade)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VendorGrades::AdminOverrideGrade)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(VendorGrades::ComputedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VendorGrades::OverriddenBy)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(VendorGrades::OverriddenAt)
                            .big_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(VendorGrades::Table, VendorGrades::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 用户表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_username")
                    .table(Users::Table)
                    .col(Users::Username)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        // 供应商表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_vendors_user_id")
                    .table(Vendors::Table)
                    .col(Vendors::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_vendors_status")
                    .table(Vendors::Table)
                    .col(Vendors::Status)
                    .to_owned(),
            )
            .await?;

        // 子表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_vendor_references_vendor_id")
                    .table(VendorReferences::Table)
                    .col(VendorReferences::VendorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_vendor_contacts_vendor_id")
                    .table(VendorContacts::Table)
                    .col(VendorContacts::VendorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_vendor_documents_vendor_id")
                    .table(VendorDocuments::Table)
                    .col(VendorDocuments::VendorId)
                    .to_owned(),
            )
            .await?;

        // 文件表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_files_user_id")
                    .table(Files::Table)
                    .col(Files::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_files_document_id")
                    .table(Files::Table)
                    .col(Files::DocumentId)
                    .to_owned(),
            )
            .await?;

        // 评审分配表索引：同一供应商、板块、评审员只允许一条分配
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reviewer_assignments_unique")
                    .table(ReviewerAssignments::Table)
                    .col(ReviewerAssignments::VendorId)
                    .col(ReviewerAssignments::Section)
                    .col(ReviewerAssignments::ReviewerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reviewer_assignments_reviewer_id")
                    .table(ReviewerAssignments::Table)
                    .col(ReviewerAssignments::ReviewerId)
                    .to_owned(),
            )
            .await?;

        // 评分表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_ratings_vendor_section")
                    .table(Ratings::Table)
                    .col(Ratings::VendorId)
                    .col(Ratings::Section)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_ratings_vendor_parameter")
                    .table(Ratings::Table)
                    .col(Ratings::VendorId)
                    .col(Ratings::ParameterKey)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(VendorGrades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ratings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReviewerAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Files::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VendorDocuments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VendorContacts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VendorReferences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vendors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    ProfileName,
    AvatarUrl,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Vendors {
    #[sea_orm(iden = "vendors")]
    Table,
    Id,
    UserId,
    CompanyName,
    LegalStatus,
    RegistrationNumber,
    GstNumber,
    PanNumber,
    ContactEmail,
    ContactPhone,
    AddressLine1,
    PinCode,
    District,
    State,
    TurnoverFy1,
    TurnoverFy2,
    TurnoverFy3,
    TurnoverFy4,
    BankName,
    AccountNumber,
    IfscCode,
    Branch,
    CompletionPercentage,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum VendorReferences {
    #[sea_orm(iden = "vendor_references")]
    Table,
    Id,
    VendorId,
    CompanyName,
    PoDate,
    PoValue,
    ContactPerson,
    ContactPhone,
}

#[derive(DeriveIden)]
enum VendorContacts {
    #[sea_orm(iden = "vendor_contacts")]
    Table,
    Id,
    VendorId,
    Name,
    Designation,
    Email,
    Phone,
}

#[derive(DeriveIden)]
enum VendorDocuments {
    #[sea_orm(iden = "vendor_documents")]
    Table,
    Id,
    VendorId,
    Kind,
}

#[derive(DeriveIden)]
enum Files {
    #[sea_orm(iden = "files")]
    Table,
    FileToken,
    FileName,
    FileSize,
    FileType,
    UploadedAt,
    DocumentId,
    UserId,
}

#[derive(DeriveIden)]
enum ReviewerAssignments {
    #[sea_orm(iden = "reviewer_assignments")]
    Table,
    Id,
    VendorId,
    Section,
    ReviewerId,
    AssignedBy,
    AssignedAt,
}

#[derive(DeriveIden)]
enum Ratings {
    #[sea_orm(iden = "ratings")]
    Table,
    Id,
    VendorId,
    Section,
    ParameterKey,
    ReviewerId,
    Value,
    RatedAt,
}

#[derive(DeriveIden)]
enum VendorGrades {
    #[sea_orm(iden = "vendor_grades")]
    Table,
    VendorId,
    SiteScore,
    ProcurementScore,
    FinancialScore,
    TotalScore,
    ComputedGrade,
    AdminOverrideGrade,
    ComputedAt,
    OverriddenBy,
    OverriddenAt,
}
