//! Tokens command implementation.
//!
//! Scans each input file and lists every token it produced, including the
//! terminal `EOF` or error token.

use std::io::{self, Write};
use std::path::PathBuf;

use asmc_lex::{scan, Token, TokenKind};
use tracing::{debug, info};

use crate::commands::common::{error_messages, read_source, OutputFormat};
use crate::error::{AsmtError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Files to scan, in order.
    pub files: Vec<PathBuf>,
    /// Listing format.
    pub format: OutputFormat,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Run the tokens command, writing the listing to stdout.
///
/// Fails with [`AsmtError::Lex`] after printing every listing if any file
/// ended in a lexical error.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let failed = write_listings(&args, &mut out)?;
    out.flush()?;

    if failed > 0 {
        return Err(AsmtError::Lex(format!(
            "{} {}",
            failed,
            error_messages::FILES_FAILED
        )));
    }
    Ok(())
}

/// Write the listing of every file and return how many ended in an error.
fn write_listings(args: &TokensArgs, out: &mut impl Write) -> Result<usize> {
    let with_headers = args.files.len() > 1 && args.format == OutputFormat::Text;
    let mut failed = 0;

    for (i, path) in args.files.iter().enumerate() {
        let source = read_source(path)?;
        let tokens = scan(&source);
        debug!(path = %path.display(), tokens = tokens.len(), "scanned file");

        if with_headers {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "==> {} <==", path.display())?;
        }
        write_listing(&tokens, args.format, out)?;

        if let Some(last) = tokens.last().filter(|t| t.kind == TokenKind::Error) {
            failed += 1;
            if args.verbose {
                info!("{}: {}", path.display(), last.text());
            }
        }
    }

    Ok(failed)
}

/// Write one file's tokens in the given format.
fn write_listing(tokens: &[Token<'_>], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (i, token) in tokens.iter().enumerate() {
                writeln!(out, "token {}: {}", i, token)?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, tokens)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn listing(source: &str, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_listing(&scan(source), format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_listing() {
        let text = listing("ori $t0, $zero, 16\n", OutputFormat::Text);
        let expected = "token 0: [identifier]: \"ori\"\n\
                        token 1: [identifier]: \"$t0\"\n\
                        token 2: [,]: \",\"\n\
                        token 3: [identifier]: \"$zero\"\n\
                        token 4: [,]: \",\"\n\
                        token 5: [integer literal]: \"16\"\n\
                        token 6: [newline]: \"\\n\"\n\
                        token 7: EOF\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_json_listing() {
        let json = listing("done:", OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"kind": "ident", "text": "done"},
                {"kind": "colon", "text": ":"},
                {"kind": "eof", "text": ""},
            ])
        );
    }

    #[test]
    fn test_listings_count_failures() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.asm");
        let bad = temp_dir.path().join("bad.asm");
        std::fs::write(&good, "nop\n").unwrap();
        std::fs::write(&bad, "mov eax, #1\n").unwrap();

        let args = TokensArgs {
            files: vec![good.clone(), bad.clone()],
            format: OutputFormat::Text,
            verbose: false,
        };
        let mut out = Vec::new();
        let failed = write_listings(&args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(failed, 1);
        assert!(text.starts_with(&format!("==> {} <==\n", good.display())));
        assert!(text.contains(&format!("\n\n==> {} <==\n", bad.display())));
        assert!(text.ends_with(
            "token 3: [error]: \"unexpected character '#' at beginning of token\"\n"
        ));
    }

    #[test]
    fn test_listings_missing_file() {
        let args = TokensArgs {
            files: vec![PathBuf::from("/nonexistent/a.asm")],
            format: OutputFormat::Text,
            verbose: false,
        };
        let err = write_listings(&args, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, AsmtError::FileOperation(_)));
    }
}
