//! Gateway environment selection

use super::constants::endpoints;

/// Gateway environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Test,
}

impl Environment {
    /// Gateway root URL for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => endpoints::PRODUCTION_URL,
            Environment::Test => endpoints::TEST_URL,
        }
    }

    /// Get the environment name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::default().base_url(),
            "https://securepay.tinkoff.ru/v2"
        );
        assert_eq!(
            Environment::Test.base_url(),
            "https://rest-api-test.tinkoff.ru/v2"
        );
        assert_eq!(Environment::Test.as_str(), "test");
    }
}
