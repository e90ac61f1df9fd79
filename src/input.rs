//! URL input sources
//!
//! Exactly one source is active per run. Lines are trimmed and blank lines are
//! skipped; the resulting stream is lazy so tasks launch as URLs arrive.

use crate::InspectorError;
use futures::stream::{self, BoxStream, StreamExt};
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A single URL given on the command line
    Target(String),
    /// A file of newline-separated URLs
    File(PathBuf),
    /// Lines read from standard input
    Stdin,
}

impl InputSource {
    /// Open the source. A missing or unreadable file fails here, before any
    /// task is launched.
    pub async fn open(self) -> Result<BoxStream<'static, String>, InspectorError> {
        match self {
            InputSource::Target(url) => {
                let url = url.trim().to_string();
                let urls = if url.is_empty() { Vec::new() } else { vec![url] };
                Ok(stream::iter(urls).boxed())
            }
            InputSource::File(path) => {
                let file = File::open(&path)
                    .await
                    .map_err(|e| InspectorError::input_file(&path, e))?;
                Ok(url_lines(BufReader::new(file), path.display().to_string()))
            }
            InputSource::Stdin => Ok(url_lines(BufReader::new(tokio::io::stdin()), "stdin".to_string())),
        }
    }
}

/// Stream the non-blank, trimmed lines of `reader`. Bytes that are not valid
/// UTF-8 are replaced rather than rejected. A read error is logged and ends
/// the stream.
pub fn url_lines<R>(reader: R, origin: String) -> BoxStream<'static, String>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    stream::unfold(reader.split(b'\n'), move |mut lines| {
        let origin = origin.clone();
        async move {
            loop {
                match lines.next_segment().await {
                    Ok(Some(line)) => {
                        let line = String::from_utf8_lossy(&line);
                        let url = line.trim();
                        if !url.is_empty() {
                            return Some((url.to_string(), lines));
                        }
                    }
                    Ok(None) => return None,
                    Err(e) => {
                        error!("Error reading {}: {}", origin, e);
                        return None;
                    }
                }
            }
        }
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lines_trimmed_and_blank_skipped() {
        let data: &[u8] = b"  https://a.example/  \n\n\t\nhttps://b.example/x.zip\r\n   \nhttps://c.example/";
        let urls: Vec<String> = url_lines(data, "test".to_string()).collect().await;
        assert_eq!(
            urls,
            vec![
                "https://a.example/".to_string(),
                "https://b.example/x.zip".to_string(),
                "https://c.example/".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_does_not_end_input() {
        let data: &[u8] = b"https://a.example/\n https://b.example/\xff\xfe\n https://c.example/\n";
        let urls: Vec<String> = url_lines(data, "test".to_string()).collect().await;
        assert_eq!(urls.len(), 3);
        assert_eq!(urls[0], "https://a.example/");
        assert!(urls[1].starts_with("https://b.example/"));
        assert_eq!(urls[2], "https://c.example/");
    }

    #[tokio::test]
    async fn test_single_target() {
        let urls: Vec<String> = InputSource::Target(" https://example.com/ ".to_string())
            .open()
            .await
            .unwrap()
            .collect()
            .await;
        assert_eq!(urls, vec!["https://example.com/".to_string()]);
    }

    #[tokio::test]
    async fn test_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        std::fs::write(&path, "https://one.example/\n\nhttps://two.example/\n").unwrap();

        let urls: Vec<String> = InputSource::File(path).open().await.unwrap().collect().await;
        assert_eq!(urls.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_fatal() {
        let result = InputSource::File(PathBuf::from("/nonexistent/urls.txt")).open().await;
        assert!(matches!(result, Err(InspectorError::InputFile { .. })));
    }
}
