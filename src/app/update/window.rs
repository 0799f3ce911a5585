//! Window event handlers

use iced::Task;

use crate::app::{App, Message};

impl App {
    pub(super) fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                self.core.window_size = *size;
                // Re-measure: one slide spans the banner width
                self.banner
                    .controller
                    .set_slide_width(self.core.slide_width());
                Some(Task::none())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }
}
