//! Contact form handling and outbound email.

pub mod sender;
pub mod service;

pub use sender::{ContactMessage, EmailSender, LogOnlySender, ResendSender, render_html};
pub use service::{ContactForm, ContactService, ProjectType};
