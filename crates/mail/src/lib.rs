pub mod render;
pub mod transport;

pub use render::{OutboundEmail, QuoteMailRenderer, RenderError, RenderedNotifications};
pub use transport::{DisabledMailer, MailError, MailTransport, RecordingMailer, SmtpMailer};
