use std::collections::HashMap;

use super::SeaOrmStorage;
use super::classrooms::{next_attendance_num, record_history};
use super::users::{NewAccount, insert_account, load_users_by_ids, update_account_basics};
use crate::entity::classrooms::Entity as Classrooms;
use crate::entity::student_assignments::{
    self, ActiveModel as AssignmentActiveModel, Entity as StudentAssignments,
};
use crate::entity::student_infos::{ActiveModel, Column, Entity as StudentInfos, Model};
use crate::entity::users::{self, Entity as Users};
use crate::errors::{Result, SchoolMateError};
use crate::models::classrooms::entities::ClassroomActionType;
use crate::models::{
    PaginationInfo, PaginationQuery,
    students::{
        entities::{Student, StudentAssignment, StudentSearchType, StudentStatus},
        requests::{
            CreateAssignmentRequest, CreateStudentRequest, StudentListQuery,
            UpdateAssignmentRequest, UpdateStudentRequest,
        },
        responses::StudentListResponse,
    },
    users::entities::{UserRole, UserStatus},
};
use crate::utils::like_contains;
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// 检查学号是否可用
pub(super) async fn ensure_student_code_available<C: ConnectionTrait>(
    db: &C,
    code: &str,
    exclude_id: Option<i64>,
) -> Result<()> {
    let mut select = StudentInfos::find().filter(Column::Code.eq(code));
    if let Some(id) = exclude_id {
        select = select.filter(Column::Id.ne(id));
    }
    let count = select
        .count(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询学号失败: {e}")))?;
    if count > 0 {
        return Err(SchoolMateError::conflict(format!(
            "Student code '{code}' already exists"
        )));
    }
    Ok(())
}

/// 每个学生最近一学年的分班
async fn load_latest_assignments<C: ConnectionTrait>(
    db: &C,
    student_ids: &[i64],
) -> Result<HashMap<i64, StudentAssignment>> {
    if student_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = StudentAssignments::find()
        .filter(student_assignments::Column::StudentInfoId.is_in(student_ids.iter().copied()))
        .order_by_asc(student_assignments::Column::SchoolYear)
        .all(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询分班信息失败: {e}")))?;

    let classroom_ids: Vec<i64> = rows.iter().map(|r| r.classroom_id).collect();
    let classrooms: HashMap<i64, _> = Classrooms::find()
        .filter(crate::entity::classrooms::Column::Id.is_in(classroom_ids))
        .all(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询班级失败: {e}")))?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    // 按学年升序遍历，后写入的覆盖前面的
    let mut latest = HashMap::new();
    for row in rows {
        let classroom = classrooms.get(&row.classroom_id);
        latest.insert(row.student_info_id, row.into_assignment(classroom));
    }
    Ok(latest)
}

/// 把学籍行组装为业务实体
pub(super) async fn assemble_students<C: ConnectionTrait>(
    db: &C,
    infos: Vec<Model>,
) -> Result<Vec<Student>> {
    let user_ids: Vec<i64> = infos.iter().map(|s| s.user_id).collect();
    let student_ids: Vec<i64> = infos.iter().map(|s| s.id).collect();
    let users = load_users_by_ids(db, user_ids).await?;
    let mut assignments = load_latest_assignments(db, &student_ids).await?;

    Ok(infos
        .into_iter()
        .filter_map(|info| {
            let user = users.get(&info.user_id)?;
            let assignment = assignments.remove(&info.id);
            Some(info.into_student(user, assignment))
        })
        .collect())
}

/// 在事务中创建一个学生（账号 + 学籍 + 可选分班）
async fn insert_student<C: ConnectionTrait>(db: &C, req: &CreateStudentRequest) -> Result<i64> {
    ensure_student_code_available(db, &req.code, None).await?;

    let user = insert_account(
        db,
        NewAccount {
            email: &req.email,
            password_hash: &req.password,
            name: &req.name,
            phone: req.phone.as_deref(),
            status: UserStatus::Active,
        },
        &[UserRole::Student],
    )
    .await?;

    let now = chrono::Utc::now().timestamp();
    let info = ActiveModel {
        user_id: Set(user.id),
        code: Set(req.code.clone()),
        status: Set(StudentStatus::Enrolled.to_string()),
        birth_date: Set(req.birth_date),
        gender: Set(req.gender.map(|g| g.to_string())),
        address: Set(req.address.clone()),
        basic_habits: Set(req.basic_habits.clone()),
        special_notes: Set(req.special_notes.clone()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| SchoolMateError::database_operation(format!("创建学籍失败: {e}")))?;

    if let Some(classroom_id) = req.classroom_id {
        insert_assignment(
            db,
            info.id,
            &req.name,
            CreateAssignmentRequest {
                school_year: req.school_year.unwrap_or_default(),
                classroom_id,
                attendance_num: req.attendance_num,
            },
        )
        .await?;
    }

    Ok(info.id)
}

/// 新增学年分班，同一学年只能有一条
async fn insert_assignment<C: ConnectionTrait>(
    db: &C,
    student_id: i64,
    student_name: &str,
    req: CreateAssignmentRequest,
) -> Result<StudentAssignment> {
    let classroom = Classrooms::find_by_id(req.classroom_id)
        .one(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询班级失败: {e}")))?
        .ok_or_else(|| SchoolMateError::not_found("Classroom not found"))?;

    let school_year = if req.school_year == 0 {
        classroom.school_year
    } else {
        req.school_year
    };
    if school_year != classroom.school_year {
        return Err(SchoolMateError::validation(format!(
            "Classroom belongs to school year {}, not {}",
            classroom.school_year, school_year
        )));
    }

    let existing = StudentAssignments::find()
        .filter(student_assignments::Column::StudentInfoId.eq(student_id))
        .filter(student_assignments::Column::SchoolYear.eq(school_year))
        .count(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询分班信息失败: {e}")))?;
    if existing > 0 {
        return Err(SchoolMateError::conflict(format!(
            "Student already has an assignment for school year {school_year}"
        )));
    }

    let attendance_num = match req.attendance_num {
        Some(num) => Some(num),
        None => Some(next_attendance_num(db, classroom.id).await?),
    };

    let assignment = AssignmentActiveModel {
        student_info_id: Set(student_id),
        school_year: Set(school_year),
        classroom_id: Set(classroom.id),
        attendance_num: Set(attendance_num),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| SchoolMateError::database_operation(format!("创建分班失败: {e}")))?;

    record_history(
        db,
        classroom.id,
        ClassroomActionType::AssignStudent,
        format!("{student_name} 배정"),
        "system",
    )
    .await?;

    Ok(assignment.into_assignment(Some(&classroom)))
}

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        let id = insert_student(&txn, &req).await?;
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_student_by_id_impl(id)
            .await?
            .ok_or_else(|| SchoolMateError::not_found("Student not found after creation"))
    }

    /// 批量导入，任一行失败则全部回滚
    pub async fn import_students_impl(&self, rows: Vec<CreateStudentRequest>) -> Result<usize> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        for row in &rows {
            insert_student(&txn, row).await?;
        }
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(rows.len())
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let info = StudentInfos::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询学生失败: {e}")))?;
        match info {
            Some(info) => Ok(assemble_students(&self.db, vec![info]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn get_student_by_code_impl(&self, code: &str) -> Result<Option<Student>> {
        let info = StudentInfos::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询学生失败: {e}")))?;
        match info {
            Some(info) => Ok(assemble_students(&self.db, vec![info]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn get_student_by_user_id_impl(&self, user_id: i64) -> Result<Option<Student>> {
        let info = StudentInfos::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询学生失败: {e}")))?;
        match info {
            Some(info) => Ok(assemble_students(&self.db, vec![info]).await?.pop()),
            None => Ok(None),
        }
    }

    /// 分页检索学生，最新创建的在前
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = StudentInfos::find();

        if let Some(keyword) = query.keyword.as_deref().map(str::trim)
            && !keyword.is_empty()
        {
            let users_matching = |col: users::Column| {
                Column::UserId.in_subquery(
                    Query::select()
                        .column(users::Column::Id)
                        .from(Users)
                        .cond_where(like_contains(col, keyword))
                        .to_owned(),
                )
            };
            select = select.filter(match query.search_type {
                Some(StudentSearchType::Name) => {
                    Condition::all().add(users_matching(users::Column::Name))
                }
                Some(StudentSearchType::Email) => {
                    Condition::all().add(users_matching(users::Column::Email))
                }
                Some(StudentSearchType::Code) => like_contains(Column::Code, keyword),
                None => Condition::any()
                    .add(users_matching(users::Column::Name))
                    .add(users_matching(users::Column::Email))
                    .add(like_contains(Column::Code, keyword)),
            });
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        let paginator = select.order_by_desc(Column::Id).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询学生总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询学生页数失败: {e}")))?;
        let infos = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: assemble_students(&self.db, infos).await?,
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 更新学生信息，学号变化时重新检查唯一性
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let Some(existing) = StudentInfos::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询学生失败: {e}")))?
        else {
            return Ok(None);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;

        if let Some(ref code) = update.code
            && *code != existing.code
        {
            ensure_student_code_available(&txn, code, Some(id)).await?;
        }

        update_account_basics(&txn, existing.user_id, update.name, update.phone).await?;

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(birth_date) = update.birth_date {
            model.birth_date = Set(Some(birth_date));
        }
        if let Some(gender) = update.gender {
            model.gender = Set(Some(gender.to_string()));
        }
        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }
        if let Some(basic_habits) = update.basic_habits {
            model.basic_habits = Set(Some(basic_habits));
        }
        if let Some(special_notes) = update.special_notes {
            model.special_notes = Set(Some(special_notes));
        }
        model
            .update(&txn)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新学生失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 修改学籍状态（软删除即改为 DROPOUT）
    pub async fn set_student_status_impl(&self, id: i64, status: StudentStatus) -> Result<bool> {
        let result = StudentInfos::update_many()
            .col_expr(Column::Status, sea_orm::sea_query::Expr::value(status.as_str()))
            .col_expr(
                Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新学籍状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 永久删除学生及其账号
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let Some(info) = StudentInfos::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询学生失败: {e}")))?
        else {
            return Ok(false);
        };

        let result = Users::delete_by_id(info.user_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 学生的全部分班记录（按学年升序）
    pub async fn list_student_assignments_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentAssignment>> {
        let rows = StudentAssignments::find()
            .filter(student_assignments::Column::StudentInfoId.eq(student_id))
            .order_by_asc(student_assignments::Column::SchoolYear)
            .find_also_related(Classrooms)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询分班信息失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(assignment, classroom)| assignment.into_assignment(classroom.as_ref()))
            .collect())
    }

    pub async fn create_student_assignment_impl(
        &self,
        student_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<StudentAssignment> {
        let student = self
            .get_student_by_id_impl(student_id)
            .await?
            .ok_or_else(|| SchoolMateError::not_found("Student not found"))?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        let assignment = insert_assignment(&txn, student.id, &student.name, req).await?;
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(assignment)
    }

    /// 修改分班，换班时必须是同一学年的班级
    pub async fn update_student_assignment_impl(
        &self,
        assignment_id: i64,
        req: UpdateAssignmentRequest,
    ) -> Result<Option<StudentAssignment>> {
        let Some(existing) = StudentAssignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询分班信息失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = AssignmentActiveModel {
            id: Set(assignment_id),
            ..Default::default()
        };

        if let Some(classroom_id) = req.classroom_id
            && classroom_id != existing.classroom_id
        {
            let classroom = Classrooms::find_by_id(classroom_id)
                .one(&self.db)
                .await
                .map_err(|e| SchoolMateError::database_operation(format!("查询班级失败: {e}")))?
                .ok_or_else(|| SchoolMateError::not_found("Classroom not found"))?;
            if classroom.school_year != existing.school_year {
                return Err(SchoolMateError::validation(
                    "Target classroom belongs to a different school year",
                ));
            }
            model.classroom_id = Set(classroom_id);
            if req.attendance_num.is_none() {
                model.attendance_num =
                    Set(Some(next_attendance_num(&self.db, classroom_id).await?));
            }
        }
        if let Some(num) = req.attendance_num {
            model.attendance_num = Set(Some(num));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新分班失败: {e}")))?;

        let classroom = Classrooms::find_by_id(updated.classroom_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询班级失败: {e}")))?;
        Ok(Some(updated.into_assignment(classroom.as_ref())))
    }

    pub async fn delete_student_assignment_impl(&self, assignment_id: i64) -> Result<bool> {
        let result = StudentAssignments::delete_by_id(assignment_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除分班失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }
}
