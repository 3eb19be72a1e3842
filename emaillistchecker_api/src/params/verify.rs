use serde::Serialize;

/// Per-call options for single-address verification.
#[derive(Clone, Debug)]
pub struct VerifyOptions {
    /// Server-side verification timeout in seconds (the API accepts 5-60).
    /// Omitted from the request unless set.
    pub timeout: Option<u32>,
    /// Ask the server to perform an SMTP check. Defaults to `true`.
    pub smtp_check: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            smtp_check: true,
        }
    }
}

impl VerifyOptions {
    pub fn with_timeout(mut self, timeout: u32) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_smtp_check(mut self, smtp_check: bool) -> Self {
        self.smtp_check = smtp_check;
        self
    }
}

/// JSON body for `POST /verify`.
#[derive(Serialize, Debug)]
pub struct VerifyRequest<'a> {
    pub email: &'a str,
    pub smtp_check: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

impl<'a> VerifyRequest<'a> {
    pub fn new(email: &'a str, options: &VerifyOptions) -> Self {
        Self {
            email,
            smtp_check: options.smtp_check,
            timeout: options.timeout,
        }
    }
}
