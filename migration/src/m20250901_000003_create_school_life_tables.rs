use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_people_tables::Users;
use crate::m20250901_000002_create_academic_tables::Classrooms;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 学校日历 ====================
        manager
            .create_table(
                Table::create()
                    .table(SchoolCalendars::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolCalendars::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SchoolCalendars::Title).string().not_null())
                    .col(ColumnDef::new(SchoolCalendars::StartDate).date().not_null())
                    .col(ColumnDef::new(SchoolCalendars::EndDate).date().null())
                    .col(ColumnDef::new(SchoolCalendars::EventType).string().not_null())
                    .col(ColumnDef::new(SchoolCalendars::TargetGrade).integer().null())
                    .col(ColumnDef::new(SchoolCalendars::Description).text().null())
                    .col(
                        ColumnDef::new(SchoolCalendars::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SchoolCalendars::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 食谱 ====================
        manager
            .create_table(
                Table::create()
                    .table(SchoolMeals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolMeals::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SchoolMeals::MealDate).date().not_null())
                    .col(ColumnDef::new(SchoolMeals::TargetType).string().not_null())
                    .col(ColumnDef::new(SchoolMeals::MealType).string().not_null())
                    .col(ColumnDef::new(SchoolMeals::Menu).text().not_null())
                    .col(ColumnDef::new(SchoolMeals::Calories).double().null())
                    .col(ColumnDef::new(SchoolMeals::AllergyInfo).string().null())
                    .col(ColumnDef::new(SchoolMeals::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(SchoolMeals::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // ==================== 公告板 ====================
        manager
            .create_table(
                Table::create()
                    .table(Boards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Boards::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Boards::BoardType).string().not_null())
                    .col(ColumnDef::new(Boards::Title).string().not_null())
                    .col(ColumnDef::new(Boards::Content).text().not_null())
                    .col(ColumnDef::new(Boards::WriterId).big_integer().not_null())
                    .col(ColumnDef::new(Boards::TargetGrade).integer().null())
                    .col(ColumnDef::new(Boards::TargetClassroomId).big_integer().null())
                    .col(
                        ColumnDef::new(Boards::ViewCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Boards::IsPinned)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Boards::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Boards::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Boards::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Boards::Table, Boards::WriterId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Boards::Table, Boards::TargetClassroomId)
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 通知 ====================
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::SenderId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Notifications::ReceiverId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Content).text().not_null())
                    .col(
                        ColumnDef::new(Notifications::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notifications::Table, Notifications::SenderId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notifications::Table, Notifications::ReceiverId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 系统设置（单行） ====================
        manager
            .create_table(
                Table::create()
                    .table(SystemSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SystemSettings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SystemSettings::CurrentSchoolYear)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SystemSettings::CurrentSemester)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SystemSettings::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 设施 ====================
        manager
            .create_table(
                Table::create()
                    .table(SchoolFacilities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolFacilities::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SchoolFacilities::Name).string().not_null())
                    .col(ColumnDef::new(SchoolFacilities::Location).string().null())
                    .col(ColumnDef::new(SchoolFacilities::Capacity).integer().null())
                    .col(ColumnDef::new(SchoolFacilities::Description).text().null())
                    .col(
                        ColumnDef::new(SchoolFacilities::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SchoolFacilities::ImageFilename)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SchoolFacilities::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SchoolFacilities::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 资产 ====================
        manager
            .create_table(
                Table::create()
                    .table(SchoolAssets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolAssets::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SchoolAssets::Name).string().not_null())
                    .col(
                        ColumnDef::new(SchoolAssets::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SchoolAssets::Category).string().null())
                    .col(ColumnDef::new(SchoolAssets::Location).string().null())
                    .col(ColumnDef::new(SchoolAssets::Status).string().not_null())
                    .col(ColumnDef::new(SchoolAssets::PurchaseDate).date().null())
                    .col(ColumnDef::new(SchoolAssets::Description).text().null())
                    .col(ColumnDef::new(SchoolAssets::ImageFilename).string().null())
                    .col(
                        ColumnDef::new(SchoolAssets::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SchoolAssets::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 上传文件表
        manager
            .create_table(
                Table::create()
                    .table(Files::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Files::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Files::StoredName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Files::OriginalName).string().not_null())
                    .col(ColumnDef::new(Files::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(Files::FileType).string().not_null())
                    .col(ColumnDef::new(Files::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Files::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Files::Table, Files::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_school_calendars_start_date")
                    .table(SchoolCalendars::Table)
                    .col(SchoolCalendars::StartDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_school_meals_date")
                    .table(SchoolMeals::Table)
                    .col(SchoolMeals::MealDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_boards_type_created")
                    .table(Boards::Table)
                    .col(Boards::BoardType)
                    .col(Boards::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notifications_receiver_read")
                    .table(Notifications::Table)
                    .col(Notifications::ReceiverId)
                    .col(Notifications::IsRead)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Files::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SchoolAssets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SchoolFacilities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SystemSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Boards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SchoolMeals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SchoolCalendars::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum SchoolCalendars {
    #[sea_orm(iden = "school_calendars")]
    Table,
    Id,
    Title,
    StartDate,
    EndDate,
    EventType,
    TargetGrade,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SchoolMeals {
    #[sea_orm(iden = "school_meals")]
    Table,
    Id,
    MealDate,
    TargetType,
    MealType,
    Menu,
    Calories,
    AllergyInfo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Boards {
    #[sea_orm(iden = "boards")]
    Table,
    Id,
    BoardType,
    Title,
    Content,
    WriterId,
    TargetGrade,
    TargetClassroomId,
    ViewCount,
    IsPinned,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    SenderId,
    ReceiverId,
    Title,
    Content,
    IsRead,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SystemSettings {
    #[sea_orm(iden = "system_settings")]
    Table,
    Id,
    CurrentSchoolYear,
    CurrentSemester,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SchoolFacilities {
    #[sea_orm(iden = "school_facilities")]
    Table,
    Id,
    Name,
    Location,
    Capacity,
    Description,
    IsAvailable,
    ImageFilename,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SchoolAssets {
    #[sea_orm(iden = "school_assets")]
    Table,
    Id,
    Name,
    Code,
    Category,
    Location,
    Status,
    PurchaseDate,
    Description,
    ImageFilename,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Files {
    #[sea_orm(iden = "files")]
    Table,
    Id,
    StoredName,
    OriginalName,
    FileSize,
    FileType,
    UserId,
    CreatedAt,
}
