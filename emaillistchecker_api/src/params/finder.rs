use serde::Serialize;

/// Paging for `find_by_domain`. Defaults: limit 10, offset 0.
#[derive(Clone, Copy, Debug)]
pub struct DomainSearch {
    /// Results per request (the API accepts 1-100).
    pub limit: u32,
    pub offset: u32,
}

impl Default for DomainSearch {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

impl DomainSearch {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

/// Limit for `find_by_company`. Defaults to 10.
#[derive(Clone, Copy, Debug)]
pub struct CompanySearch {
    pub limit: u32,
}

impl Default for CompanySearch {
    fn default() -> Self {
        Self { limit: 10 }
    }
}

impl CompanySearch {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

#[derive(Serialize, Debug)]
pub struct FindEmailRequest<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub domain: &'a str,
}

#[derive(Serialize, Debug)]
pub struct DomainSearchRequest<'a> {
    pub domain: &'a str,
    pub limit: u32,
    pub offset: u32,
}

#[derive(Serialize, Debug)]
pub struct CompanySearchRequest<'a> {
    pub company: &'a str,
    pub limit: u32,
}
