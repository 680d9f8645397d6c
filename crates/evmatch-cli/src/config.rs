use std::path::Path;

use anyhow::Context;
use evmatch_diff::{CompareOptions, Tree};

/// Load comparison options from an optional TOML file.
///
/// `strict_flag` can only switch strict mode on; a config file asking for
/// strict mode is not overridden by its absence on the command line.
pub fn load_options(path: Option<&Path>, strict_flag: bool) -> anyhow::Result<CompareOptions> {
    let mut options = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str::<CompareOptions>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => CompareOptions::default(),
    };
    if strict_flag {
        options.strict = true;
    }
    tracing::debug!(strict = options.strict, "comparison options loaded");
    Ok(options)
}

/// Read and parse a JSON document.
pub fn load_tree(path: &Path) -> anyhow::Result<Tree> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Tree::from_json_str(&text).with_context(|| format!("parsing {}", path.display()))
}
