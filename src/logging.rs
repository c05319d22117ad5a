//! Request/response logging.
//!
//! When logging is enabled on a client, every dispatched request, every successful
//! response and every failed response is handed to a [`RequestLogger`]. Logging is
//! best-effort: a logger cannot fail a request or change its result.
//!
//! [`FileLogger`] appends plain-text entries to a file that is rotated daily. The
//! process-wide default instance ([`default_logger`]) writes to `~/log/bitget/log.txt`
//! and is created on first use.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use reqwest::header::HeaderMap;
use time::macros::format_description;
use time::{Date, OffsetDateTime, format_description::well_known::Rfc3339};

use crate::auth::{ACCESS_PASSPHRASE, ACCESS_SIGN};
use crate::request::{RequestParams, Verb};

/// A request about to be sent.
#[derive(Debug, Clone, Copy)]
pub struct LoggedRequest<'a> {
    /// HTTP verb
    pub verb: Verb,
    /// Full request URL, including the query string for GET
    pub url: &'a str,
    /// Non-null request parameters
    pub params: &'a RequestParams,
    /// Headers sent with the request
    pub headers: &'a HeaderMap,
}

/// A response received from the transport.
#[derive(Debug, Clone, Copy)]
pub struct LoggedResponse<'a> {
    /// HTTP status code
    pub code: &'a str,
    /// HTTP status message
    pub message: &'a str,
    /// Raw body
    pub body: &'a str,
}

/// Sink for request log entries.
pub trait RequestLogger: Send + Sync {
    /// Record an outgoing request.
    fn log_request(&self, request: &LoggedRequest<'_>);

    /// Record a successful response.
    fn log_response(&self, response: &LoggedResponse<'_>);

    /// Record a failed response. Called before the error is returned to the caller.
    fn log_error(&self, response: &LoggedResponse<'_>);
}

impl LoggedRequest<'_> {
    /// Render the entry as plain text.
    ///
    /// Signature and passphrase header values are redacted.
    pub fn to_text(&self) -> String {
        let mut text = format!("{} {}\n", self.verb, self.url);
        if !self.params.is_empty() {
            let args = self.params.json_body().unwrap_or_default();
            text.push_str(&format!("  Args: {args}\n"));
        }
        let headers: Vec<String> = self
            .headers
            .iter()
            .map(|(name, value)| {
                let redact = name.as_str().eq_ignore_ascii_case(ACCESS_SIGN)
                    || name.as_str().eq_ignore_ascii_case(ACCESS_PASSPHRASE);
                let value = if redact {
                    "[REDACTED]"
                } else {
                    value.to_str().unwrap_or("[binary]")
                };
                format!("{:?} => {:?}", name.as_str(), value)
            })
            .collect();
        text.push_str(&format!("  Headers: {{{}}}\n", headers.join(", ")));
        text
    }
}

impl LoggedResponse<'_> {
    /// Render the entry as plain text.
    pub fn to_text(&self) -> String {
        format!(
            "Code: {}\nMessage: {}\nBody: {}\n",
            self.code, self.message, self.body
        )
    }
}

/// Default log file location: `~/log/bitget/log.txt`.
///
/// Falls back to the system temp directory when no home directory is known.
pub fn default_log_file_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("log")
        .join("bitget")
        .join("log.txt")
}

static DEFAULT_LOGGER: OnceLock<Arc<FileLogger>> = OnceLock::new();

/// The process-wide file logger at [`default_log_file_path`].
///
/// Created on first call; later calls return the same instance.
pub fn default_logger() -> Arc<FileLogger> {
    DEFAULT_LOGGER
        .get_or_init(|| Arc::new(FileLogger::new(default_log_file_path())))
        .clone()
}

/// A plain-text, daily-rotated log file.
///
/// The file (and its parent directories) is created on the first write. When the
/// UTC date changes, the current file is renamed to `<file>.<YYYYMMDD>` of the day
/// it was written and a fresh file is started.
pub struct FileLogger {
    path: PathBuf,
    state: Mutex<Option<OpenLog>>,
}

struct OpenLog {
    file: File,
    date: Date,
}

impl FileLogger {
    /// Create a logger writing to `path`. Nothing is touched on disk until the
    /// first entry is written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: Mutex::new(None),
        }
    }

    /// The active log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path an entry file for `date` is rotated to.
    pub fn rotated_path(&self, date: Date) -> PathBuf {
        let suffix = date
            .format(format_description!("[year][month][day]"))
            .unwrap_or_default();
        let mut name = self.path.clone().into_os_string();
        name.push(".");
        name.push(suffix);
        PathBuf::from(name)
    }

    /// Append one entry. Failures are reported through `tracing` and swallowed.
    pub fn write_entry(&self, severity: &str, text: &str) {
        if let Err(e) = self.try_write(severity, text) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write request log");
        }
    }

    fn try_write(&self, severity: &str, text: &str) -> io::Result<()> {
        let now = OffsetDateTime::now_utc();
        let today = now.date();

        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::other("request log lock poisoned"))?;

        let open = match state.take() {
            Some(open) if open.date == today => open,
            Some(stale) => {
                drop(stale.file);
                self.rotate(stale.date)?;
                self.open(today)?
            }
            None => self.open(today)?,
        };
        let open = state.insert(open);

        let stamp = now.format(&Rfc3339).map_err(io::Error::other)?;
        write!(open.file, "{stamp} {severity} -- {text}")?;
        if !text.ends_with('\n') {
            writeln!(open.file)?;
        }
        open.file.flush()
    }

    fn open(&self, today: Date) -> io::Result<OpenLog> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // A file left over from an earlier day is rotated before appending.
        if let Ok(modified) = fs::metadata(&self.path).and_then(|m| m.modified()) {
            let written = OffsetDateTime::from(modified).date();
            if written < today {
                self.rotate(written)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        Ok(OpenLog { file, date: today })
    }

    fn rotate(&self, date: Date) -> io::Result<()> {
        match fs::rename(&self.path, self.rotated_path(date)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

impl std::fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileLogger").field("path", &self.path).finish()
    }
}

impl RequestLogger for FileLogger {
    fn log_request(&self, request: &LoggedRequest<'_>) {
        self.write_entry("INFO", &request.to_text());
    }

    fn log_response(&self, response: &LoggedResponse<'_>) {
        self.write_entry("INFO", &response.to_text());
    }

    fn log_error(&self, response: &LoggedResponse<'_>) {
        self.write_entry("ERROR", &response.to_text());
    }
}

/// A logger that forwards entries to `tracing` events under the
/// `bitget_api_client::requests` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl RequestLogger for TracingLogger {
    fn log_request(&self, request: &LoggedRequest<'_>) {
        tracing::info!(target: "bitget_api_client::requests", "{}", request.to_text());
    }

    fn log_response(&self, response: &LoggedResponse<'_>) {
        tracing::info!(
            target: "bitget_api_client::requests",
            code = response.code,
            message = response.message,
            body = response.body,
            "response"
        );
    }

    fn log_error(&self, response: &LoggedResponse<'_>) {
        tracing::error!(
            target: "bitget_api_client::requests",
            code = response.code,
            message = response.message,
            body = response.body,
            "error response"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_log_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir()
            .join(format!("bitget_log_test_{name}_{nanos}"))
            .join("nested")
            .join("log.txt")
    }

    #[test]
    fn test_file_logger_creates_directories_lazily() {
        let path = temp_log_path("lazy");
        let logger = FileLogger::new(&path);
        assert!(!path.exists());

        logger.log_response(&LoggedResponse {
            code: "200",
            message: "OK",
            body: "{}",
        });

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("INFO -- Code: 200"));
        assert!(content.contains("Message: OK"));
        assert!(content.contains("Body: {}"));
    }

    #[test]
    fn test_file_logger_error_severity() {
        let path = temp_log_path("error");
        let logger = FileLogger::new(&path);
        logger.log_error(&LoggedResponse {
            code: "418",
            message: "I'm a teapot",
            body: "",
        });

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("ERROR -- Code: 418"));
        assert!(content.contains("Message: I'm a teapot"));
    }

    #[test]
    fn test_request_text_redacts_secrets() {
        let mut headers = HeaderMap::new();
        headers.insert("access-key", HeaderValue::from_static("my_key"));
        headers.insert("access-sign", HeaderValue::from_static("c2lnbmF0dXJl"));
        headers.insert("access-passphrase", HeaderValue::from_static("my_passphrase"));
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        let params = RequestParams::new().with("coin", "BTC");

        let text = LoggedRequest {
            verb: Verb::Get,
            url: "https://api.bitget.com/api/v2/spot/public/coins?coin=BTC",
            params: &params,
            headers: &headers,
        }
        .to_text();

        assert!(text.starts_with("GET https://api.bitget.com/api/v2/spot/public/coins"));
        assert!(text.contains(r#"Args: {"coin":"BTC"}"#));
        assert!(text.contains(r#""content-type" => "application/json""#));
        assert!(text.contains(r#""access-key" => "my_key""#));
        assert!(!text.contains("c2lnbmF0dXJl"));
        assert!(!text.contains("my_passphrase"));
    }

    #[test]
    fn test_request_text_omits_empty_args() {
        let text = LoggedRequest {
            verb: Verb::Get,
            url: "https://api.bitget.com/api/v2/spot/account/info",
            params: &RequestParams::new(),
            headers: &HeaderMap::new(),
        }
        .to_text();
        assert!(!text.contains("Args:"));
    }

    #[test]
    fn test_stale_file_rotated_on_open() {
        let path = temp_log_path("rotate");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "old entry\n").unwrap();
        let yesterday = SystemTime::now() - std::time::Duration::from_secs(2 * 24 * 60 * 60);
        File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(yesterday)
            .unwrap();

        let logger = FileLogger::new(&path);
        logger.write_entry("INFO", "new entry");

        let rotated = logger.rotated_path(OffsetDateTime::from(yesterday).date());
        assert_eq!(fs::read_to_string(&rotated).unwrap(), "old entry\n");
        let current = fs::read_to_string(&path).unwrap();
        assert!(current.contains("new entry"));
        assert!(!current.contains("old entry"));
    }

    #[test]
    fn test_rotated_path_suffix() {
        let logger = FileLogger::new("/tmp/bitget/log.txt");
        let date = Date::from_calendar_date(2025, time::Month::February, 9).unwrap();
        assert_eq!(
            logger.rotated_path(date),
            PathBuf::from("/tmp/bitget/log.txt.20250209")
        );
    }

    #[test]
    fn test_default_logger_is_shared() {
        assert!(Arc::ptr_eq(&default_logger(), &default_logger()));
        assert!(default_logger().path().ends_with("log/bitget/log.txt"));
    }
}
