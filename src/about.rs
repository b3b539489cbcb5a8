use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

const DEFAULT_ABOUT: &str = "Hello, and welcome to this blog.
Here I share notes on development, technology and everyday thoughts.
It is a personal blog, written and maintained by one person.";

/// The text of the blog's About page, kept in a plain text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct About {
    /// The page body.
    pub content: String,
}

impl About {
    /// Reads the About text. A missing file yields the default welcome text.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Ok(About { content }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} not found, using default About text", path.display());
                Ok(About::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the About text with `content`, trimmed. Blank content is
    /// rejected and leaves the file alone.
    pub fn save<P: AsRef<Path>>(path: P, content: &str) -> Result<Self> {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::MissingField("content"));
        }

        let path = path.as_ref();
        fs::write(path, content)?;
        log::info!("updated About text in {}", path.display());
        Ok(About {
            content: content.to_string(),
        })
    }
}

impl Default for About {
    fn default() -> Self {
        About {
            content: DEFAULT_ABOUT.to_string(),
        }
    }
}
