//! UI surface contract and in-crate surfaces.

pub mod headless;
pub mod scripted;
pub mod traits;

pub use headless::HeadlessUi;
pub use scripted::ScriptedUi;
pub use traits::{Severity, TextStyle, Ui};
