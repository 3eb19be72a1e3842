//! `User-Agent` header sent with every request.

const SDK_NAME: &str = "EmailListChecker-Rust";

pub fn get_user_agent() -> String {
    format!("{}/{}", SDK_NAME, env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifies_sdk_and_version() {
        let ua = get_user_agent();
        assert!(ua.starts_with("EmailListChecker-Rust/"));
        assert!(ua.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
