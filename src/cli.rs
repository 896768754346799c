use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

/// Prompt shown before reading the archive path
pub const PROMPT: &str = "请输入压缩文件的路径：";

#[derive(Parser, Debug)]
#[command(name = "arc2md")]
#[command(version)]
#[command(about = "Extract an archive and render its contents as markdown", long_about = None)]
#[command(after_help = "The archive path is read interactively; output.md is written next to it.\n\
  Supported: .zip .rar .tar .tar.gz .tar.bz2 .7z")]
pub struct Cli {
    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default tracing filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Print [`PROMPT`] and read one line from `input`.
///
/// The line terminator is dropped; everything else, spaces included, is
/// kept as part of the path.
pub fn prompt_archive_path(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<PathBuf> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no archive path given",
        ));
    }

    let path = line.strip_suffix('\n').unwrap_or(&line);
    let path = path.strip_suffix('\r').unwrap_or(path);
    Ok(PathBuf::from(path))
}

pub fn success_message(output: &std::path::Path) -> String {
    format!("转换完成，输出文件为{}", output.display())
}

pub fn error_message(err: &dyn std::fmt::Display) -> String {
    format!("发生错误: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_path_without_newline() {
        let mut input = io::Cursor::new(b"/tmp/my archive.zip\r\n".to_vec());
        let mut output = Vec::new();

        let path = prompt_archive_path(&mut input, &mut output).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/my archive.zip"));
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[test]
    fn eof_is_an_error() {
        let mut input = io::Cursor::new(Vec::new());
        let err = prompt_archive_path(&mut input, &mut Vec::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn verbosity_maps_to_filter() {
        assert_eq!(Cli::parse_from(["arc2md"]).log_filter(), "warn");
        assert_eq!(Cli::parse_from(["arc2md", "-v"]).log_filter(), "info");
        assert_eq!(Cli::parse_from(["arc2md", "-vvv"]).log_filter(), "debug");
    }
}
