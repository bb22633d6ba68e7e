//! Toast notification widget

use std::fmt;

/// Toast notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastStyle {
    /// Get the icon for this style
    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Success => "✓",
            ToastStyle::Error => "✗",
            ToastStyle::Warning => "⚠",
            ToastStyle::Info => "ℹ",
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
    pub visible: bool,
}

impl Toast {
    pub fn new(message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            message: message.into(),
            style,
            visible: true,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Info)
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.visible {
            return Ok(());
        }
        write!(f, "{} {}", self.style.icon(), self.message)
    }
}
