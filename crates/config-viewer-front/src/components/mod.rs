pub mod error_message;
pub mod layout;
pub mod panel;

pub use error_message::*;
pub use layout::*;
pub use panel::*;
