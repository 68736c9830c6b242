use serenity::all::CreateEmbed;

use crate::bot::{command::CommandSpec, embed::COLOR_BLUE};

/// Builds the command list embed.
///
/// # Arguments
/// - `prefix` - Command prefix shown before each usage
/// - `commands` - Commands to list, in order
pub fn help_embed(prefix: &str, commands: &[CommandSpec]) -> CreateEmbed {
    commands.iter().fold(
        CreateEmbed::new()
            .title("📖 Available Commands")
            .color(COLOR_BLUE),
        |embed, spec| {
            let description = if spec.admin_only {
                format!("{} (administrators only)", spec.description)
            } else {
                spec.description.to_string()
            };
            embed.field(format!("{}{}", prefix, spec.usage), description, false)
        },
    )
}
