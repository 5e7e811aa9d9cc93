use std::fs;

use toml::{Table, Value};

/// Sections of `default_config.toml` and the path-valued keys each must set.
const SCHEMA: &[(&str, &[&str])] = &[
    ("site", &["static_dir", "public_dir"]),
    ("page", &["content", "template", "output"]),
];

fn main() {
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");
    let table: Table = content
        .parse()
        .unwrap_or_else(|e| panic!("Invalid default_config.toml: {}", e));

    if let Err(problem) = check_schema(&table) {
        panic!("Invalid default_config.toml: {}", problem);
    }
}

// Every key is spelled out in the shipped file, so a typo can't hide behind
// a serde default.
fn check_schema(table: &Table) -> Result<(), String> {
    for name in table.keys() {
        if !SCHEMA.iter().any(|(section, _)| section == name) {
            return Err(format!("unknown section [{name}]"));
        }
    }

    for (section, keys) in SCHEMA {
        let values = match table.get(*section) {
            Some(Value::Table(values)) => values,
            Some(other) => {
                return Err(format!("[{section}] must be a table, found {}", other.type_str()));
            }
            None => return Err(format!("missing [{section}] table")),
        };

        for key in *keys {
            match values.get(*key) {
                Some(Value::String(_)) => {}
                Some(other) => {
                    return Err(format!(
                        "[{section}].{key} must be a string, found {}",
                        other.type_str()
                    ));
                }
                None => return Err(format!("missing [{section}].{key}")),
            }
        }

        if let Some(unknown) = values.keys().find(|k| !keys.contains(&k.as_str())) {
            return Err(format!("unknown key [{section}].{unknown}"));
        }
    }
    Ok(())
}
