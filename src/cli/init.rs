//! Init command - write a starter configuration file

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use crate::config::CONFIG_FILE_NAME;

const STARTER_CONFIG: &str = r#"# readlint configuration
#
# All values are optional; the defaults are shown commented out.

[readability]
# Target reader age. Sentences that most formulas place above this age
# are flagged.
#age = 16

# Fraction of the 7 readability formulas that must agree before a
# sentence is flagged. 4/7 by default.
#threshold = 0.5714285714285714

# Sentences with fewer words than this are never scored; the formulas
# are unreliable on very short samples. Set to 0 to score everything.
#min-words = 5
"#;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let dir = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        println!(
            "{} {} already exists",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, STARTER_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    Ok(())
}
