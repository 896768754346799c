//! Markdown tree rendering of an extracted directory.
//!
//! Every file or directory becomes a `# name` heading indented by two spaces
//! per nesting level. Text files get their content in a fenced block right
//! under the heading, binary files get the heading alone, and directories
//! are followed by the fragments of their children.
//!
//! ~~~text
//!   # docs
//!     # readme.txt
//!
//! ```
//! hello
//!     ```
//!     # logo.png
//! ~~~

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::classify::{Classification, classify_bytes};
use crate::error::{ConvertError, Result};

/// Indentation unit repeated once per nesting level
const INDENT: &str = "  ";

/// One file or directory about to be rendered.
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub level: usize,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, level: usize) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            level,
        }
    }

    /// Render this entry and, for directories, everything below it.
    ///
    /// Paths that are neither a regular file nor a directory (after
    /// following symlinks) render as nothing.
    pub fn render(&self) -> Result<String> {
        if self.path.is_file() {
            self.render_file()
        } else if self.path.is_dir() {
            self.render_dir()
        } else {
            debug!(path = %self.path.display(), "skipping non-regular entry");
            Ok(String::new())
        }
    }

    fn heading(&self) -> String {
        format!("{}# {}\n", INDENT.repeat(self.level), self.name)
    }

    fn render_file(&self) -> Result<String> {
        // One read serves both the classifier and the embedded content.
        let data = std::fs::read(&self.path).map_err(|e| ConvertError::io(&self.path, e))?;

        if classify_bytes(&data) == Classification::Binary {
            debug!(path = %self.path.display(), "binary file");
            return Ok(self.heading());
        }

        let text = String::from_utf8(data).map_err(|e| {
            ConvertError::io(
                &self.path,
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })?;

        let content = if self.name.ends_with(".json") {
            pretty_json(&text).map_err(|source| ConvertError::Decode {
                path: self.path.clone(),
                source,
            })?
        } else {
            text
        };

        let indent = INDENT.repeat(self.level);
        Ok(format!(
            "{heading}{indent}\n```\n{content}\n{indent}```\n",
            heading = self.heading(),
        ))
    }

    fn render_dir(&self) -> Result<String> {
        let mut fragment = self.heading();

        let entries =
            std::fs::read_dir(&self.path).map_err(|e| ConvertError::io(&self.path, e))?;

        // read_dir order is kept as-is; it is visible in the output.
        for entry in entries {
            let entry = entry.map_err(|e| ConvertError::io(&self.path, e))?;
            let child = Entry::new(
                entry.path(),
                entry.file_name().to_string_lossy(),
                self.level + 1,
            );
            fragment.push_str(&child.render()?);
        }

        Ok(fragment)
    }
}

/// Render each named child of `root` at level 1 and concatenate the results.
///
/// Names are relative to `root` and are used verbatim as headings.
pub fn render_top_level<I, S>(root: &Path, names: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut document = String::new();
    for name in names {
        let name = name.as_ref();
        document.push_str(&Entry::new(root.join(name), name, 1).render()?);
    }
    Ok(document)
}

/// Re-serialize a JSON document with four-space indentation.
///
/// Object keys keep their original order. The result is pure printable
/// ASCII: anything else is written as `\uXXXX` UTF-16 escapes.
pub fn pretty_json(text: &str) -> serde_json::Result<String> {
    let value: serde_json::Value = serde_json::from_str(text)?;

    let mut out = Vec::with_capacity(text.len());
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;

    let pretty =
        String::from_utf8(out).map_err(<serde_json::Error as serde::ser::Error>::custom)?;
    Ok(escape_non_ascii(&pretty))
}

/// Outside of string literals serialized JSON is already ASCII, so the
/// whole document can be escaped in one pass.
fn escape_non_ascii(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() && c != '\x7f' {
            escaped.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units).iter() {
            escaped.push_str(&format!("\\u{unit:04x}"));
        }
    }
    escaped
}
