//! Signature input: command-line arguments or a file of them.

use std::io::Read;

use unionname::Error;

/// One signature to process, and where it came from for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub text: String,
    pub filename: Option<String>,
}

/// Read input from a file path or stdin if path is "-".
///
/// Returns the content and a display name for error messages.
pub fn read_input(path: &str) -> Result<(String, String), String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| format!("<stdin>: {}", e))?;
        Ok((content, "<stdin>".to_string()))
    } else {
        let content = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
        Ok((content, path.to_string()))
    }
}

/// Signatures from the arguments, followed by those in `file`.
///
/// In a file, each non-blank line is one signature; lines starting with
/// `//` are comments.
pub fn collect_inputs(args: &[String], file: Option<&str>) -> Result<Vec<Input>, Error> {
    let mut inputs: Vec<Input> = args
        .iter()
        .map(|text| Input {
            text: text.trim().to_string(),
            filename: None,
        })
        .collect();

    if let Some(path) = file {
        let (content, name) = read_input(path).map_err(Error::Api)?;
        inputs.extend(signature_lines(&content).map(|line| Input {
            text: line.to_string(),
            filename: Some(name.clone()),
        }));
    }
    Ok(inputs)
}

fn signature_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
}
