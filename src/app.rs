//! 终端前端
//!
//! 用逐行命令代替页面上的输入框和按钮：`set` 相当于一次输入，
//! `insert` / `update` / `delete` / `search` 相当于点击对应按钮。

use crate::clients::HttpStudentClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{FormBuffer, FormField, StudentRecord};
use crate::orchestrator::FormOrchestrator;
use crate::services::{ConsoleNotifier, Outcome};
use crate::utils::logging::{log_startup, truncate_text};
use std::fmt::Write as _;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

const HELP: &str = "\
命令:
  set <字段> <值>   修改表单字段（字段: account name department grade class email find_id new_name delete_id search_id）
  clear <字段>      清空表单字段
  form              显示表单
  list              显示学生列表
  refresh           重新获取学生列表
  insert            新增學生
  update            修改學生
  delete            刪除學生
  search            查詢學生
  help              显示本帮助
  quit | exit       退出";

/// 一条用户命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(FormField, String),
    Clear(FormField),
    Form,
    List,
    Refresh,
    Insert,
    Update,
    Delete,
    Search,
    Help,
    Quit,
}

/// 命令解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("请输入命令")]
    Empty,
    #[error("未知命令: {0}（输入 help 查看帮助）")]
    Unknown(String),
    #[error("缺少字段名")]
    MissingField,
    #[error("未知字段: {0}")]
    BadField(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim_start()),
            None => (line, ""),
        };

        let command = match verb {
            "" => return Err(CommandError::Empty),
            "set" | "clear" => {
                let (name, value) = match rest.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (rest, ""),
                };
                if name.is_empty() {
                    return Err(CommandError::MissingField);
                }
                let field = name
                    .parse::<FormField>()
                    .map_err(|_| CommandError::BadField(name.to_string()))?;
                if verb == "set" {
                    Command::Set(field, value.to_string())
                } else {
                    Command::Clear(field)
                }
            }
            "form" => Command::Form,
            "list" | "ls" => Command::List,
            "refresh" => Command::Refresh,
            "insert" => Command::Insert,
            "update" => Command::Update,
            "delete" => Command::Delete,
            "search" => Command::Search,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

/// 执行一条命令后的去向
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// 继续读取，附带需要显示的内容（可能为空）
    Continue(String),
    Quit,
}

/// 应用主结构
pub struct App {
    config: Config,
    orchestrator: Arc<FormOrchestrator>,
}

impl App {
    /// 使用 HTTP 客户端和终端提示初始化应用
    pub fn initialize(config: Config) -> Self {
        let api = Arc::new(HttpStudentClient::new(&config));
        let orchestrator = FormOrchestrator::new(api, Arc::new(ConsoleNotifier));
        Self::with_orchestrator(config, Arc::new(orchestrator))
    }

    pub fn with_orchestrator(config: Config, orchestrator: Arc<FormOrchestrator>) -> Self {
        Self {
            config,
            orchestrator,
        }
    }

    pub fn orchestrator(&self) -> &Arc<FormOrchestrator> {
        &self.orchestrator
    }

    /// 运行应用主循环：挂载 → 显示列表 → 逐行读取命令
    pub async fn run(&self) -> AppResult<()> {
        log_startup(&self.config);

        self.orchestrator.mount().await;
        let mut stdout = tokio::io::stdout();
        let list = render_list(&self.orchestrator.students().await);
        stdout.write_all(list.as_bytes()).await?;
        stdout.write_all(b"\n").await?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            debug!("命令: {}", truncate_text(&line, 80));

            let output = match line.parse::<Command>() {
                Ok(command) => match self.execute(command).await {
                    Flow::Continue(output) => output,
                    Flow::Quit => break,
                },
                Err(CommandError::Empty) => continue,
                Err(e) => e.to_string(),
            };

            if !output.is_empty() {
                stdout.write_all(output.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
            }
        }

        info!("👋 已退出");
        Ok(())
    }

    /// 执行一条命令，返回需要显示的内容
    pub async fn execute(&self, command: Command) -> Flow {
        let orchestrator = &self.orchestrator;
        let output = match command {
            Command::Set(field, value) => {
                orchestrator.edit(field, value).await;
                String::new()
            }
            Command::Clear(field) => {
                orchestrator.edit(field, "").await;
                String::new()
            }
            Command::Form => render_form(&orchestrator.form().await),
            Command::List => render_list(&orchestrator.students().await),
            Command::Refresh => {
                orchestrator.fetch_all().await;
                render_list(&orchestrator.students().await)
            }
            Command::Insert => {
                let succeeded = orchestrator.insert().await.is_success();
                self.mutate_then_list(succeeded).await
            }
            Command::Update => {
                let succeeded = orchestrator.update().await.is_success();
                self.mutate_then_list(succeeded).await
            }
            Command::Delete => {
                let succeeded = orchestrator.delete().await.is_success();
                self.mutate_then_list(succeeded).await
            }
            Command::Search => match orchestrator.search().await.outcome() {
                Some(Outcome::Success(Some(found))) => render_search(found),
                _ => String::new(),
            },
            Command::Help => HELP.to_string(),
            Command::Quit => return Flow::Quit,
        };
        Flow::Continue(output)
    }

    async fn mutate_then_list(&self, succeeded: bool) -> String {
        if succeeded {
            render_list(&self.orchestrator.students().await)
        } else {
            String::new()
        }
    }
}

// ========== 渲染 ==========

pub fn render_list(students: &[StudentRecord]) -> String {
    let mut out = String::from("學生資料");
    if students.is_empty() {
        out.push_str("\n（無資料）");
        return out;
    }
    for student in students {
        let _ = write!(out, "\n{}\n{}", "-".repeat(30), student);
    }
    out
}

pub fn render_form(form: &FormBuffer) -> String {
    let mut out = String::new();
    for (title, fields) in [
        ("新增學生", &FormField::INSERT[..]),
        ("修改學生", &[FormField::FindId, FormField::NewName][..]),
        ("刪除學生", &[FormField::DeleteId][..]),
        ("查詢學生", &[FormField::SearchId][..]),
    ] {
        let _ = writeln!(out, "【{}】", title);
        for field in fields {
            let _ = writeln!(out, "  {:<12}{}: {}", field.key(), field.label(), form.get(*field));
        }
    }
    out.trim_end().to_string()
}

pub fn render_search(found: &StudentRecord) -> String {
    format!("查詢結果\n{}", found)
}
