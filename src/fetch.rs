use anyhow::{anyhow, bail, Context, Result};
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use url::Url;

use crate::config::FetchConfig;

/// Where the feed XML is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(Url),
    File(PathBuf),
    Stdin,
}

impl Source {
    /// `-` is stdin, http(s)/file URLs map to their kind, anything that is not
    /// an absolute URL is taken as a local path.
    pub fn parse(s: &str) -> Result<Source> {
        if s == "-" {
            return Ok(Source::Stdin);
        }
        match Url::parse(s) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Source::Url(url)),
                "file" => url
                    .to_file_path()
                    .map(Source::File)
                    .map_err(|_| anyhow!("invalid file URL: {s}")),
                other => bail!("unsupported URL scheme {other:?} in {s}"),
            },
            Err(_) => Ok(Source::File(PathBuf::from(s))),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{url}"),
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => write!(f, "<stdin>"),
        }
    }
}

pub fn client(cfg: &FetchConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(cfg.timeout)
        .user_agent(cfg.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Read the whole feed document from `source`.
pub async fn load(source: &Source, cfg: &FetchConfig) -> Result<String> {
    match source {
        Source::Url(url) => fetch_rss(&client(cfg)?, url).await,
        Source::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read feed file {}", path.display())),
        Source::Stdin => {
            let mut xml = String::new();
            tokio::io::stdin()
                .read_to_string(&mut xml)
                .await
                .context("failed to read feed from stdin")?;
            Ok(xml)
        }
    }
}

pub async fn fetch_rss(client: &Client, url: &Url) -> Result<String> {
    let text = client
        .get(url.clone())
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("failed to fetch {url}"))?
        .text()
        .await
        .with_context(|| format!("failed to read body of {url}"))?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    const FEED: &str = "<rss><channel><title>Local</title></channel></rss>";

    async fn serve_once(status: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = sock.read(&mut buf).await;
            let resp = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/rss+xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(resp.as_bytes()).await.unwrap();
            sock.shutdown().await.ok();
        });
        Url::parse(&format!("http://{addr}/feed.xml")).unwrap()
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    #[test]
    fn classify_sources() {
        assert_eq!(Source::parse("-").unwrap(), Source::Stdin);
        assert!(matches!(Source::parse("https://news.example/rss").unwrap(), Source::Url(_)));
        assert!(matches!(Source::parse("http://news.example/rss").unwrap(), Source::Url(_)));
        assert_eq!(Source::parse("feeds/news.xml").unwrap(), Source::File(PathBuf::from("feeds/news.xml")));
        assert_eq!(Source::parse("/tmp/news.xml").unwrap(), Source::File(PathBuf::from("/tmp/news.xml")));
        assert_eq!(Source::parse("file:///tmp/news.xml").unwrap(), Source::File(PathBuf::from("/tmp/news.xml")));
    }

    #[test]
    fn unsupported_scheme_is_rejected() {
        let err = Source::parse("ftp://news.example/rss").unwrap_err();
        assert!(err.to_string().contains("unsupported URL scheme"), "{err}");
    }

    #[test]
    fn display_names_source() {
        assert_eq!(Source::Stdin.to_string(), "<stdin>");
        assert_eq!(Source::parse("https://a.example/rss").unwrap().to_string(), "https://a.example/rss");
    }

    #[tokio::test]
    async fn fetches_feed_over_http() {
        let url = serve_once("200 OK", FEED).await;
        let body = fetch_rss(&local_client(), &url).await.unwrap();
        assert_eq!(body, FEED);
    }

    #[tokio::test]
    async fn http_error_status_fails() {
        let url = serve_once("404 Not Found", "missing").await;
        let err = fetch_rss(&local_client(), &url).await.unwrap_err();
        assert!(err.to_string().contains("failed to fetch"), "{err}");
    }

    #[tokio::test]
    async fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FEED.as_bytes()).unwrap();
        let source = Source::File(file.path().to_path_buf());
        let xml = load(&source, &FetchConfig::default()).await.unwrap();
        assert_eq!(xml, FEED);
    }

    #[tokio::test]
    async fn missing_file_fails_with_path() {
        let source = Source::File(PathBuf::from("/definitely/not/here.xml"));
        let err = load(&source, &FetchConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.xml"), "{err}");
    }
}
