// cardiorisk/src/commands/attributes.rs
//! `attributes`: lists the input fields, grouped, with their accepted values.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;

use crate::ui::report::print_attribute_catalogue;
use crate::ui::theme::ThemeMap;

pub fn run_attributes(theme: &ThemeMap) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    print_attribute_catalogue(&mut stdout.lock(), theme, supports_color)?;
    Ok(())
}
