use anyhow::{bail, Result};


// "true"/"1"/"yes"/"on" and their negatives, case-insensitive
pub fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("{} is not a boolean: {:?}", key, other),
    }
}

// 0.85 -> "0.85", 0 -> "0.0", 0.00001 -> "1e-05"
pub fn format_score(score: f64) -> String {
    let repr = format!("{:?}", score);
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return repr;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return repr;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}
