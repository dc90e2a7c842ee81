use serde::{Deserialize, Serialize};
use std::fmt;

/// 学生记录（服务端返回的数据）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// 服务端分配的 ID，创建后不可变
    #[serde(rename = "_id")]
    pub id: String,
    /// 帐号，服务端保证唯一
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub department: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub grade: String,
    #[serde(rename = "class", default, deserialize_with = "text_or_number")]
    pub class_name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub email: String,
}

// 显示字段：缺失或 null 视为空串，数字（例如 `"grade": 1`）转为文本
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, a number or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "帳號: {}", self.user_name)?;
        writeln!(f, "姓名: {}", self.name)?;
        writeln!(f, "院系: {}", self.department)?;
        writeln!(f, "年級: {}", self.grade)?;
        writeln!(f, "班級: {}", self.class_name)?;
        write!(f, "Email: {}", self.email)
    }
}

/// 新增学生请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    #[serde(rename = "userName")]
    pub user_name: String,
    pub name: String,
    pub department: String,
    pub grade: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub email: String,
}

/// 修改姓名请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateName {
    pub id: String,
    pub name: String,
}
