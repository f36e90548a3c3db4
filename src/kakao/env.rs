pub const KAKAO_REST_API_KEY: &str = "KAKAO_REST_API_KEY";
pub const KAKAO_MAP_KEY: &str = "KAKAO_MAP_KEY";

#[macro_export]
macro_rules! warn_if_env_var_is_missing {
    ($var:expr, $message:expr) => {
        if $crate::kakao::env::read_non_empty($var).is_none() {
            tracing::warn!(
                "The `{}` environment variable isn't set. {}",
                $var,
                $message
            );
        }
    };
}

pub fn read_non_empty(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

/// Blank values count as missing.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
