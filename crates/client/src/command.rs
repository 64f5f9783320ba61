/// One decoded input line. The whole command surface is decided here, once
/// per line, instead of scattering prefix and length checks through the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free text: send as a chat message.
    Send(String),
    /// Literal `clear mine`: delete the current user's messages.
    ClearMine,
    /// Literal `show all`: fetch and print the full log.
    ShowAll,
    /// `block <name>`: block another user by name.
    Block(String),
    /// Literal `exit`: terminate without a server call.
    Exit,
    /// Blank input: re-prompt without a server call.
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let input = line.trim();

        match input {
            "" => Command::Empty,
            "exit" => Command::Exit,
            "clear mine" => Command::ClearMine,
            "show all" => Command::ShowAll,
            _ => match input.strip_prefix("block ") {
                // `block` with nothing after it is just a message.
                Some(name) if !name.is_empty() => Command::Block(name.to_string()),
                _ => Command::Send(input.to_string()),
            },
        }
    }
}
