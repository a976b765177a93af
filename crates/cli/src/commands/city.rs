//! `weatherchat city` and `weatherchat knowledge` — Inspect the reference table.

use anyhow::Context;

pub fn run(name: &str, json: bool) -> anyhow::Result<()> {
    let Some(record) = weatherchat_knowledge::lookup(name) else {
        let known: Vec<_> = weatherchat_knowledge::keys().collect();
        println!("No reference data for '{name}'. Known cities: {}", known.join(", "));
        return Ok(());
    };

    if json {
        let rendered =
            serde_json::to_string_pretty(record).context("Failed to serialise city record")?;
        println!("{rendered}");
    } else {
        print!("{}", record.render());
    }
    Ok(())
}

pub fn knowledge() {
    println!("{}", weatherchat_knowledge::render_all());
}
