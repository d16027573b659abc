use crate::error::CliError;
use query::{Operator, RawQuery};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct OperatorRow {
    name: &'static str,
    token: &'static str,
    any: bool,
}

fn operator_rows() -> Vec<OperatorRow> {
    Operator::ALL
        .into_iter()
        .map(|op| OperatorRow {
            name: op.name(),
            token: op.token(),
            any: op.is_any(),
        })
        .collect()
}

pub fn print_operators(as_json: bool) -> Result<(), CliError> {
    if as_json {
        let json =
            serde_json::to_string_pretty(&operator_rows()).map_err(CliError::JsonSerialize)?;
        println!("{json}");
        return Ok(());
    }

    println!("{:<24} {}", "Operator", "Token");
    println!("-----------------------------");
    for row in operator_rows() {
        println!("{:<24} {}", row.name, row.token);
    }
    Ok(())
}

pub fn raw_query_json(raw: &RawQuery) -> Result<String, CliError> {
    serde_json::to_string_pretty(raw).map_err(CliError::JsonSerialize)
}
