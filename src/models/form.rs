//! 表单缓冲区
//!
//! 四个操作各自独占一组字段，互不共享。

use crate::models::{NewStudent, UpdateName};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    // 新增
    Account,
    Name,
    Department,
    Grade,
    Class,
    Email,
    // 修改
    FindId,
    NewName,
    // 删除
    DeleteId,
    // 查询
    SearchId,
}

impl FormField {
    pub const ALL: [FormField; 10] = [
        FormField::Account,
        FormField::Name,
        FormField::Department,
        FormField::Grade,
        FormField::Class,
        FormField::Email,
        FormField::FindId,
        FormField::NewName,
        FormField::DeleteId,
        FormField::SearchId,
    ];

    /// 新增操作使用的六个字段
    pub const INSERT: [FormField; 6] = [
        FormField::Account,
        FormField::Name,
        FormField::Department,
        FormField::Grade,
        FormField::Class,
        FormField::Email,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FormField::Account => "account",
            FormField::Name => "name",
            FormField::Department => "department",
            FormField::Grade => "grade",
            FormField::Class => "class",
            FormField::Email => "email",
            FormField::FindId => "find_id",
            FormField::NewName => "new_name",
            FormField::DeleteId => "delete_id",
            FormField::SearchId => "search_id",
        }
    }

    /// 输入框占位提示
    pub fn label(self) -> &'static str {
        match self {
            FormField::Account => "帳號",
            FormField::Name => "姓名",
            FormField::Department => "院系",
            FormField::Grade => "年級",
            FormField::Class => "班級",
            FormField::Email => "Email",
            FormField::FindId => "修改ID",
            FormField::NewName => "新姓名",
            FormField::DeleteId => "刪除ID",
            FormField::SearchId => "查詢ID",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 无法识别的字段名
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("未知字段: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    /// 同时接受页面表单的输入名（`Class`、`findId`、`id` 等）和 snake_case 名
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "account" => FormField::Account,
            "name" => FormField::Name,
            "department" => FormField::Department,
            "grade" => FormField::Grade,
            "class" | "Class" => FormField::Class,
            "email" | "Email" => FormField::Email,
            "find_id" | "findId" => FormField::FindId,
            "new_name" | "newName" => FormField::NewName,
            "delete_id" | "id" => FormField::DeleteId,
            "search_id" | "searchId" => FormField::SearchId,
            other => return Err(UnknownField(other.to_string())),
        };
        Ok(field)
    }
}

/// 表单缓冲区
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBuffer {
    pub account: String,
    pub name: String,
    pub department: String,
    pub grade: String,
    pub class_name: String,
    pub email: String,
    pub find_id: String,
    pub new_name: String,
    pub delete_id: String,
    pub search_id: String,
}

impl FormBuffer {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Account => &self.account,
            FormField::Name => &self.name,
            FormField::Department => &self.department,
            FormField::Grade => &self.grade,
            FormField::Class => &self.class_name,
            FormField::Email => &self.email,
            FormField::FindId => &self.find_id,
            FormField::NewName => &self.new_name,
            FormField::DeleteId => &self.delete_id,
            FormField::SearchId => &self.search_id,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Account => &mut self.account,
            FormField::Name => &mut self.name,
            FormField::Department => &mut self.department,
            FormField::Grade => &mut self.grade,
            FormField::Class => &mut self.class_name,
            FormField::Email => &mut self.email,
            FormField::FindId => &mut self.find_id,
            FormField::NewName => &mut self.new_name,
            FormField::DeleteId => &mut self.delete_id,
            FormField::SearchId => &mut self.search_id,
        }
    }

    /// 修改单个字段（相当于一次输入）
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// 新增所需字段齐全时返回请求体
    pub fn insert_payload(&self) -> Option<NewStudent> {
        if FormField::INSERT.iter().any(|f| self.get(*f).is_empty()) {
            return None;
        }
        Some(NewStudent {
            user_name: self.account.clone(),
            name: self.name.clone(),
            department: self.department.clone(),
            grade: self.grade.clone(),
            class_name: self.class_name.clone(),
            email: self.email.clone(),
        })
    }

    pub fn update_payload(&self) -> Option<UpdateName> {
        if self.find_id.is_empty() || self.new_name.is_empty() {
            return None;
        }
        Some(UpdateName {
            id: self.find_id.clone(),
            name: self.new_name.clone(),
        })
    }

    pub fn delete_target(&self) -> Option<String> {
        (!self.delete_id.is_empty()).then(|| self.delete_id.clone())
    }

    pub fn search_target(&self) -> Option<String> {
        (!self.search_id.is_empty()).then(|| self.search_id.clone())
    }

    pub fn clear_insert(&mut self) {
        for field in FormField::INSERT {
            self.slot_mut(field).clear();
        }
    }

    pub fn clear_update(&mut self) {
        self.find_id.clear();
        self.new_name.clear();
    }

    pub fn clear_delete(&mut self) {
        self.delete_id.clear();
    }
}
