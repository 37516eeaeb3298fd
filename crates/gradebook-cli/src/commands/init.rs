//! The `gradebook init` command.

use anyhow::Result;

use gradebook_core::config::GradebookConfig;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("gradebook.toml");
    if path.exists() {
        println!("gradebook.toml already exists, skipping.");
        return Ok(());
    }

    let config = GradebookConfig::default();
    let mut content = String::from("# gradebook configuration\n\n");
    content.push_str(&toml::to_string_pretty(&config)?);
    std::fs::write(path, content)?;
    println!("Created gradebook.toml");

    println!("\nNext steps:");
    println!("  1. Edit gradebook.toml to choose a data file and format");
    println!("  2. Run: gradebook add --id s1 --name \"Ada Lovelace\" --grades 95,88");
    println!("  3. Run: gradebook list");

    Ok(())
}
