// Export the design tokens of a pair of brand colors as JSON.
//
// Usage: design-tokens-tools [CONFIG]
//
// CONFIG (default "design-system.hjson") is an HJSON object such as
//
//     primary: "#2196F3"
//     secondary: "#9C27B0"
//     output: design-tokens.json
//
// Every key is optional.  Set RUST_LOG=debug for details.

use std::{string::String,
          env,
          fs::File,
          io::{self, BufWriter, prelude::*},
          path::{Path, PathBuf}};
use serde_hjson::Value::{self, *};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use design_tokens::{DesignTokens, Primitives, try_parse_hex};

const DEFAULT_CONFIG: &str = "design-system.hjson";
const DEFAULT_OUTPUT: &str = "design-tokens.json";

#[derive(Debug, Error)]
enum ToolError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot parse {}: {source}", path.display())]
    Hjson { path: PathBuf, source: serde_hjson::Error },
    #[error("configuration: {0}")]
    Config(String),
    #[error("cannot write tokens: {0}")]
    Write(#[from] io::Error),
    #[error("cannot serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, PartialEq)]
struct Config {
    primary: String,
    secondary: String,
    output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config { primary: "#2196F3".into(), secondary: "#9C27B0".into(),
                 output: DEFAULT_OUTPUT.into() }
    }
}

fn config_of_value(v: &Value) -> Result<Config, ToolError> {
    let m = match v {
        Object(m) => m,
        _ => return Err(ToolError::Config("expected an object".into())),
    };
    let string_key = |key: &str| match m.get(key) {
        None | Some(Null) => Ok(None),
        Some(String(s)) => Ok(Some(s.clone())),
        Some(v) => Err(ToolError::Config(
            format!("{key:?} must be a string, found {v:?}"))),
    };
    let mut config = Config::default();
    if let Some(s) = string_key("primary")? { config.primary = s }
    if let Some(s) = string_key("secondary")? { config.secondary = s }
    if let Some(s) = string_key("output")? { config.output = s.into() }
    Ok(config)
}

/// Read the configuration at `path`.  Without a path, the defaults are
/// used when `DEFAULT_CONFIG` does not exist; a named file must exist.
fn read_config(path: Option<&Path>) -> Result<Config, ToolError> {
    let path = match path {
        Some(path) => path,
        None => {
            let path = Path::new(DEFAULT_CONFIG);
            if !path.exists() {
                info!(path = DEFAULT_CONFIG, "no configuration file, using defaults");
                return Ok(Config::default())
            }
            path
        }
    };
    let fh = File::open(path)
        .map_err(|source| ToolError::Read { path: path.into(), source })?;
    let v: Value = serde_hjson::from_reader(fh)
        .map_err(|source| ToolError::Hjson { path: path.into(), source })?;
    config_of_value(&v)
}

fn write_tokens(out: &mut impl Write, tokens: &DesignTokens)
                -> Result<(), ToolError> {
    serde_json::to_writer_pretty(&mut *out, tokens)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), ToolError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = env::args_os().nth(1).map(PathBuf::from);
    let config = read_config(path.as_deref())?;
    for (name, hex) in [("primary", &config.primary),
                        ("secondary", &config.secondary)] {
        if let Err(e) = try_parse_hex(hex) {
            warn!(seed = name, input = %hex, error = %e, "using black");
        }
    }

    let primitives = Primitives::from_hex(&config.primary, &config.secondary);
    let unresolved = primitives.unresolved();
    if !unresolved.is_empty() {
        warn!(count = unresolved.len(), "semantic roles without primitives");
    }
    let tokens = DesignTokens::new(&primitives);
    let mut fh = BufWriter::new(File::create(&config.output)?);
    write_tokens(&mut fh, &tokens)?;
    info!(output = %config.output.display(),
          primitives = tokens.primitives.len(),
          roles = tokens.semantic.len(), "tokens written");
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Config, ToolError> {
        let v: Value = serde_hjson::from_str(s).unwrap();
        config_of_value(&v)
    }

    #[test]
    fn full_config() {
        let c = parse("{\n  primary: \"#FF5722\"\n  secondary: \"#607D8B\"\n  \
                       output: out.json\n}").unwrap();
        assert_eq!(c, Config { primary: "#FF5722".into(),
                               secondary: "#607D8B".into(),
                               output: "out.json".into() });
    }

    #[test]
    fn defaults() {
        assert_eq!(parse("{}").unwrap(), Config::default());
        let c = parse("{ secondary: \"#000000\" }").unwrap();
        assert_eq!(c.primary, "#2196F3");
        assert_eq!(c.secondary, "#000000");
    }

    #[test]
    fn wrong_types() {
        assert!(matches!(parse("{ primary: 12 }"), Err(ToolError::Config(_))));
        assert!(matches!(parse("[1, 2]"), Err(ToolError::Config(_))));
    }

    #[test]
    fn named_config_must_exist() {
        let path = Path::new("no/such/dir/design-system.hjson");
        match read_config(Some(path)) {
            Err(ToolError::Read { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            r => panic!("expected a read error, got {r:?}"),
        }
    }

    #[test]
    fn absent_default_config_uses_defaults() {
        // Tests run from the tools crate, which ships no configuration.
        assert!(!Path::new(DEFAULT_CONFIG).exists());
        assert_eq!(read_config(None).unwrap(), Config::default());
    }

    #[test]
    fn writes_json() {
        let tokens = DesignTokens::new(&Primitives::default());
        let mut out = Vec::new();
        write_tokens(&mut out, &tokens).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["primitives"].as_array().map(|a| a.len()), Some(62));
        assert_eq!(v["semantic"].as_array().map(|a| a.len()), Some(30));
    }
}
