use std::process::Command;

/// True when `cmd` resolves on `PATH`.
pub fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Blocks until the user presses Enter. Used by `--debug` to inspect discovered values.
pub fn pause(msg: &str) -> std::io::Result<()> {
    use std::io::{self, Write};
    print!("{}", msg);
    io::stdout().flush()?;
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(())
}
