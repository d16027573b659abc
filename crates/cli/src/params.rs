use std::fs;
use std::path::Path;

use query::{Params, Value};
use tracing::debug;

use crate::error::CliError;

/// Collects template parameters from a params file and `KEY=VALUE` flags.
#[derive(Debug, Clone, Default)]
pub struct ParamLoader {
    params: Params,
}

impl ParamLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a `.json` object file, or any other file as `KEY=VALUE` lines.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            let params: Params = serde_json::from_str(&content)?;
            debug!("Loaded {} params from {}", params.len(), path.display());
            self.params.extend(params);
        } else {
            self.parse_env_content(&content)?;
        }
        Ok(())
    }

    /// Applies `KEY=VALUE` pairs, overriding earlier values.
    pub fn apply_pairs<I, S>(&mut self, pairs: I) -> Result<(), CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = split_pair(pair)
                .ok_or_else(|| CliError::Config(format!("expected KEY=VALUE, got '{pair}'")))?;
            let value = parse_value(value);
            debug!("Param {} set as {}", key, value.type_name());
            self.params.insert(key, value);
        }
        Ok(())
    }

    pub fn into_params(self) -> Params {
        self.params
    }

    fn parse_env_content(&mut self, content: &str) -> Result<(), CliError> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match split_pair(line) {
                Some((key, value)) => {
                    self.params.insert(key, parse_value(value));
                }
                None => {
                    return Err(CliError::Config(format!(
                        "malformed line {} (expected KEY=VALUE)",
                        line_num + 1
                    )));
                }
            }
        }

        Ok(())
    }
}

fn split_pair(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Single-quoted text is always a string; anything else is decoded as JSON
/// when possible and kept as a plain string otherwise.
pub fn parse_value(raw: &str) -> Value {
    let raw = raw.trim();

    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return Value::String(raw[1..raw.len() - 1].to_string());
    }

    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::String(raw.to_string()))
}
