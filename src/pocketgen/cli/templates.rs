//! Output templates, kept as standalone `.tmp` files and embedded at compile
//! time. They are minijinja templates; styling goes through the `style`
//! filter so the same template serves colored and plain output.

pub const COMMAND_TEMPLATE: &str = include_str!("templates/command.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
