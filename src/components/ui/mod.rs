//! Presentational Elements
//!
//! Stateless wrappers that only add markup and classes.

mod alert;
mod button;
mod card;
mod input;
mod spinner;

pub use alert::{Alert, AlertDescription};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardHeader, CardTitle};
pub use input::TextInput;
pub use spinner::Spinner;
