//! Thread modal: the opening post and its replies

use std::fmt;

use crate::app::ThreadDetails;
use crate::database::{Reply, Thread};
use crate::ui::widgets::{empty_state, format_date, section_header};

#[derive(Debug, Clone)]
pub struct ThreadView {
    pub thread: Thread,
    pub replies: Vec<Reply>,
}

impl ThreadView {
    pub fn new(details: &ThreadDetails) -> Self {
        Self {
            thread: details.thread.clone(),
            replies: details.replies.clone(),
        }
    }
}

impl fmt::Display for ThreadView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let thread = &self.thread;
        writeln!(f, "{}", thread.title)?;
        writeln!(f, "by {}  {}", thread.user_name, format_date(thread.created_at))?;
        writeln!(f, "{}", thread.content)?;
        writeln!(f)?;
        writeln!(f, "{}", section_header("Replies", Some(self.replies.len())))?;
        if self.replies.is_empty() {
            write!(f, "{}", empty_state("No replies yet", "Add the first reply"))?;
        }
        for reply in &self.replies {
            writeln!(
                f,
                "  {}: {}  ({})",
                reply.user_name,
                reply.content,
                format_date(reply.created_at)
            )?;
        }
        Ok(())
    }
}
