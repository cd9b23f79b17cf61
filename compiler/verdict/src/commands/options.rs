//! Flag parsing shared by every command.

use chrono::NaiveDateTime;
use verdict_eval::{Context, EvalOptions};
use verdict_fmt::{FormatConfig, Parenthesization, Spacing};

use crate::render::ColorMode;

/// Flags accepted after the command name. Positional arguments are kept in
/// order in `inputs`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CliOptions {
    pub inputs: Vec<String>,
    /// `--context=` value: inline JSON or `@path`.
    pub context: Option<String>,
    pub strict: bool,
    pub now: Option<NaiveDateTime>,
    pub format: FormatConfig,
    pub color: ColorMode,
    /// `compile --listing`: print one instruction per line instead of JSON.
    pub listing: bool,
}

impl CliOptions {
    pub fn eval_options(&self) -> EvalOptions {
        let options = EvalOptions::new().with_strict_variables(self.strict);
        match self.now {
            Some(now) => options.with_now(now),
            None => options,
        }
    }

    /// Load the `--context` value, or an empty context.
    pub fn load_context(&self) -> Result<Context, String> {
        let Some(raw) = &self.context else {
            return Ok(Context::new());
        };
        let text = load_text(raw)?;
        Context::from_json_str(&text).map_err(|e| format!("invalid context: {e}"))
    }
}

/// Parse everything after the command name.
pub fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();

    for arg in args {
        if let Some(context) = arg.strip_prefix("--context=") {
            options.context = Some(context.to_string());
        } else if arg == "--strict" {
            options.strict = true;
        } else if let Some(now) = arg.strip_prefix("--now=") {
            let parsed = verdict_ir::parse_datetime_text(now)
                .ok_or_else(|| format!("invalid --now datetime '{now}'"))?;
            options.now = Some(parsed);
        } else if let Some(parens) = arg.strip_prefix("--parens=") {
            let parens = parens
                .parse::<Parenthesization>()
                .map_err(|e| e.to_string())?;
            options.format = options.format.with_parens(parens);
        } else if let Some(spacing) = arg.strip_prefix("--spacing=") {
            let spacing = spacing
                .parse::<Spacing>()
                .map_err(|e| e.to_string())?;
            options.format = options.format.with_spacing(spacing);
        } else if let Some(color) = arg.strip_prefix("--color=") {
            options.color = color
                .parse::<ColorMode>()
                .map_err(|e| e.to_string())?;
        } else if arg == "--listing" {
            options.listing = true;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            options.inputs.push(arg.clone());
        }
    }

    Ok(options)
}

/// `@path` reads a file; anything else is taken literally.
pub fn load_text(arg: &str) -> Result<String, String> {
    match arg.strip_prefix('@') {
        Some(path) => read_file(path),
        None => Ok(arg.to_string()),
    }
}

pub fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

#[cfg(test)]
mod tests;
