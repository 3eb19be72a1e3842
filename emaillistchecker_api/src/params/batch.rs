use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use reqwest::multipart::{Form, Part};

use crate::Error;

/// Options shared by list and file batch submissions.
#[derive(Clone, Debug)]
pub struct BatchOptions {
    pub name: Option<String>,
    /// Webhook notified when the batch completes.
    pub callback_url: Option<String>,
    /// Start verification immediately. Defaults to `true`.
    pub auto_start: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            name: None,
            callback_url: None,
            auto_start: true,
        }
    }
}

impl BatchOptions {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_callback_url(mut self, callback_url: &str) -> Self {
        self.callback_url = Some(callback_url.to_string());
        self
    }

    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }

    /// Builds the upload form: file, `auto_start`, then optional `name`
    /// and `callback_url`. The upload endpoint reads fields positionally.
    pub fn to_upload_form(&self, filename: &str, bytes: Vec<u8>) -> Result<Form, Error> {
        let file = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/octet-stream")
            .map_err(|e| Error::RequestFailed {
                message: e.to_string(),
            })?;
        let mut form = Form::new()
            .part("file", file)
            .text("auto_start", self.auto_start.to_string());
        if let Some(name) = &self.name {
            form = form.text("name", name.clone());
        }
        if let Some(callback_url) = &self.callback_url {
            form = form.text("callback_url", callback_url.clone());
        }
        Ok(form)
    }
}

/// JSON body for `POST /verify/batch`. Up to 10,000 emails per batch.
#[derive(Serialize, Debug)]
pub struct BatchRequest<'a> {
    pub emails: &'a [String],
    pub auto_start: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<&'a str>,
}

impl<'a> BatchRequest<'a> {
    pub fn new(emails: &'a [String], options: &'a BatchOptions) -> Self {
        Self {
            emails,
            auto_start: options.auto_start,
            name: options.name.as_deref(),
            callback_url: options.callback_url.as_deref(),
        }
    }
}

/// Download format for batch results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultFormat {
    #[default]
    Json,
    Csv,
    Txt,
}

impl fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResultFormat::Json => "json",
            ResultFormat::Csv => "csv",
            ResultFormat::Txt => "txt",
        })
    }
}

impl FromStr for ResultFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ResultFormat::Json),
            "csv" => Ok(ResultFormat::Csv),
            "txt" => Ok(ResultFormat::Txt),
            _ => Err(format!("unknown result format '{}' (expected json, csv or txt)", s)),
        }
    }
}

/// Which verification outcomes to include in batch results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultFilter {
    #[default]
    All,
    Valid,
    Invalid,
    Risky,
    Unknown,
}

impl fmt::Display for ResultFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResultFilter::All => "all",
            ResultFilter::Valid => "valid",
            ResultFilter::Invalid => "invalid",
            ResultFilter::Risky => "risky",
            ResultFilter::Unknown => "unknown",
        })
    }
}

impl FromStr for ResultFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ResultFilter::All),
            "valid" => Ok(ResultFilter::Valid),
            "invalid" => Ok(ResultFilter::Invalid),
            "risky" => Ok(ResultFilter::Risky),
            "unknown" => Ok(ResultFilter::Unknown),
            _ => Err(format!(
                "unknown result filter '{}' (expected all, valid, invalid, risky or unknown)",
                s
            )),
        }
    }
}
