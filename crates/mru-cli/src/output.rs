use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn raw_is_single_line() {
        let rendered = render(&json!({"id": 1, "title": "Lamp"}), OutputFormat::Raw).expect("render");
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn json_is_pretty() {
        let rendered = render(&json!({"id": 1}), OutputFormat::Json).expect("render");
        assert_eq!(rendered, "{\n  \"id\": 1\n}");
    }
}
