//! `weatherchat ask` — Answer a single message from the command line.

use std::path::Path;

use weatherchat_agent::WeatherChat;
use weatherchat_core::message::Message;

pub async fn run(config_path: Option<&Path>, message: String) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let chat = WeatherChat::from_config(&config);

    let reply = chat.respond(vec![Message::user(message)]).await?;
    println!("{}", reply.reply);
    Ok(())
}
