use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Print previously generated passwords, most recent first.
pub async fn run(data_dir: &Path) -> Result<()> {
    let mut session = super::new_session(data_dir);
    session.load_history().await?;

    if session.history().is_empty() {
        println!("no passwords generated yet");
    } else {
        println!("{}", "Last 5 Generated Passwords".bold());
        for (index, password) in session.history().iter().enumerate() {
            println!("{}. {}", index + 1, password);
        }
    }
    Ok(())
}
