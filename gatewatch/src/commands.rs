use teloxide::utils::command::BotCommands;

/// Chat commands understood by the bot.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Gatewatch commands:")]
pub enum Command {
    #[command(description = "classify a website: /url <address>")]
    Url(String),
    #[command(description = "show this help text")]
    Help,
}
