//! Mail module for momgen
//!
//! Sends the HTML summary over SMTP.

mod sender;
mod smtp;

pub use sender::MailSender;
pub use smtp::SmtpMailer;
