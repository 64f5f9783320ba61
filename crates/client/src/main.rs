//! Line-oriented terminal client for the chat relay.
//!
//! Sequential prompt loop: one request per input line, blocking on the reply
//! before prompting again. Connectivity failures and expired deadlines are
//! fatal and unretried.

mod api;
mod command;

use std::env;
use std::io::{self, BufRead, Write};

use api::RelayApi;
use command::Command;

fn main() -> anyhow::Result<()> {
    let base_url =
        env::var("CHAT_RELAY_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let api = RelayApi::new(base_url)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("What is your name? ");
    stdout.flush()?;
    let mut name = String::new();
    stdin.lock().read_line(&mut name)?;
    let user = name.trim().to_string();

    let greeting = api.greet(&user)?;
    println!("Response: {greeting}");

    println!("\n=== Chat started ===");
    println!("Commands:");
    println!("   - Enter message -> will be sent & saved");
    println!("   - \"clear mine\" -> deletes your messages");
    println!("   - \"show all\" -> shows all messages");
    println!("   - \"block <name>\" -> blocks a user");
    println!("   - \"exit\" -> exits the chat\n");

    let mut line = String::new();
    loop {
        print!("[{user}]: ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // stdin closed
            println!("Chat ended.");
            break;
        }

        match Command::parse(&line) {
            Command::Exit => {
                println!("Chat ended.");
                break;
            }
            Command::Empty => continue,
            Command::ClearMine => {
                let reply = api.clear_my_messages(&user)?;
                println!("{reply}");
            }
            Command::ShowAll => {
                let messages = api.get_all_messages()?;
                println!("\n=== All Messages ===");
                if messages.is_empty() {
                    println!("   No messages available.");
                } else {
                    for (idx, entry) in messages.iter().enumerate() {
                        println!("   {}. [{}]: {}", idx + 1, entry.user, entry.message);
                    }
                }
                println!("==========================\n");
            }
            Command::Block(name) => {
                let reply = api.block_user(&name)?;
                println!("{reply}");
            }
            Command::Send(message) => {
                let reply = api.send_chat(&user, &message)?;
                println!("{reply}");
            }
        }
    }

    Ok(())
}
