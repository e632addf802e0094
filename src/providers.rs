use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::SignInError;

/// Third-party identity providers offering OAuth-based sign-in.
///
/// Not extensible without a code change; the backend contract
/// (`/oauth/login/{provider}`) is keyed on these exact names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialProvider {
    Github,
    Google,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 2] = [SocialProvider::Github, SocialProvider::Google];

    /// Relative backend path of the provider's login endpoint.
    pub fn login_path(&self) -> String {
        format!("/oauth/login/{self}")
    }

    /// Localization key for the provider's button label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Github => "login.withGitHub",
            Self::Google => "login.withGoogle",
        }
    }
}

impl Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Github => write!(f, "github"),
            Self::Google => write!(f, "google"),
        }
    }
}

impl FromStr for SocialProvider {
    type Err = SignInError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Self::Github),
            "google" => Ok(Self::Google),
            _ => Err(SignInError::InvalidProvider(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_paths_match_backend_contract() {
        assert_eq!(SocialProvider::Github.login_path(), "/oauth/login/github");
        assert_eq!(SocialProvider::Google.login_path(), "/oauth/login/google");
    }

    #[test]
    fn display_and_from_str_round_trip() {
        for provider in SocialProvider::ALL {
            let parsed: SocialProvider = provider.to_string().parse().unwrap();
            assert_eq!(parsed, provider);
        }
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = "facebook".parse::<SocialProvider>().unwrap_err();
        assert_eq!(err, SignInError::InvalidProvider("facebook".to_string()));
    }
}
