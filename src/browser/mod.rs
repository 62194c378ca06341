pub mod config;
pub mod driver;
pub mod session;

pub use config::{ConnectionOptions, LaunchOptions};
pub use driver::{Download, Driver, NodeSnapshot, SelectorKind, Target, WaitUntil};
pub use session::BrowserSession;
