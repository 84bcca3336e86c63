use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

use failure::Fail;
use log::{debug, info};

/// An opened metadata document.
pub struct Document {
    /// The URI the document was loaded from; `None` for local files.
    pub source: Option<String>,
    pub reader: Box<dyn BufRead>,
}

/// Open a metadata document from an `http(s)://` URL or a local path.
pub fn open(locator: &str, timeout: Duration) -> Result<Document, SourceError> {
    if is_url(locator) {
        fetch(locator, timeout)
    } else {
        read_file(Path::new(locator))
    }
}

fn is_url(locator: &str) -> bool {
    locator.starts_with("http://") || locator.starts_with("https://")
}

fn fetch(url: &str, timeout: Duration) -> Result<Document, SourceError> {
    info!("Fetching `{}`", url);

    let response = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?
        .get(url)
        .send()?;

    if !response.status().is_success() {
        return Err(SourceError::Status {
            url: url.into(),
            status: response.status().as_u16(),
        });
    }

    debug!(
        "Response for `{}` with content type {:?}",
        url,
        response.headers().get(reqwest::header::CONTENT_TYPE)
    );

    Ok(Document {
        source: Some(url.into()),
        reader: Box::new(BufReader::new(response)),
    })
}

fn read_file(path: &Path) -> Result<Document, SourceError> {
    debug!("Reading `{}`", path.display());

    let file = File::open(path).map_err(|error| SourceError::File {
        path: path.display().to_string(),
        error,
    })?;

    Ok(Document {
        source: None,
        reader: Box::new(BufReader::new(file)),
    })
}

/// Errors while opening a document.
#[derive(Debug, Fail)]
pub enum SourceError {
    #[fail(display = "Unable to request document: {}", _0)]
    Request(#[cause] reqwest::Error),
    #[fail(display = "Request for `{}` failed with status {}", url, status)]
    Status { url: String, status: u16 },
    #[fail(display = "Unable to open `{}`: {}", path, error)]
    File {
        path: String,
        #[cause]
        error: std::io::Error,
    },
}

impl From<reqwest::Error> for SourceError {
    fn from(error: reqwest::Error) -> Self {
        SourceError::Request(error)
    }
}
