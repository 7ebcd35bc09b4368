use crate::Result;
use colored::Colorize;
use passgen_core::Config;
use std::path::Path;

/// Options for the generate command.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    /// Password length override.
    pub length: Option<u16>,
    /// Exclude numeric digits.
    pub no_digits: bool,
    /// Exclude letters.
    pub no_letters: bool,
    /// Exclude symbols.
    pub no_symbols: bool,
    /// Copy the generated password to the clipboard.
    pub copy: bool,
}

/// Generate a new password.
pub async fn run(data_dir: &Path, options: GenerateOptions) -> Result<()> {
    let mut session = super::new_session(data_dir);
    session.load_history().await?;

    let mut config = Config::default();
    if options.length.is_some() {
        config.length = options.length;
    }
    config.digits = !options.no_digits;
    config.letters = !options.no_letters;
    config.symbols = !options.no_symbols;
    session.set_config(config);

    match session.generate().await? {
        Some(password) => {
            println!("{}", password);
            if options.copy {
                session.copy_current_password().await?;
                if let Some(notice) = session.notice().await {
                    eprintln!("{}", notice.to_string().green());
                }
            }
        }
        None => {
            if let Some(notice) = session.notice().await {
                eprintln!("{}", notice.to_string().red());
            }
        }
    }
    Ok(())
}
