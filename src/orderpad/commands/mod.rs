use crate::config::OrderpadConfig;
use crate::error::{OrderpadError, Result};
use crate::model::{Order, Scope};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod init;
pub mod list;
pub mod update;

#[derive(Debug, Clone)]
pub struct OrderpadPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl OrderpadPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| OrderpadError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_orders: Vec<Order>,
    pub listed_orders: Vec<Order>,
    pub config: Option<OrderpadConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_orders(mut self, orders: Vec<Order>) -> Self {
        self.listed_orders = orders;
        self
    }

    pub fn with_config(mut self, config: OrderpadConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Raw form input for a new order, as typed by the user.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub product: String,
    pub quantity: String,
    pub warehouse: String,
}
