//
//  notion-cli
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Integration Token Helpers
//!
//! Notion authenticates API calls with an internal integration token, created
//! at <https://www.notion.so/my-integrations>. The token is stored in the
//! config store under `apiToken` or supplied through `NOTION_API_TOKEN`.
//!
//! This module only checks the token's shape and hides it for display; whether
//! Notion accepts the token is only known once a request is made.
//!
//! ## Security Best Practices
//!
//! - Never commit tokens to version control
//! - Share only the pages an integration needs with it
//! - Rotate tokens periodically

/// Validates the format of a token string.
///
/// A token must be non-empty and contain no whitespace. This does not check
/// the token with Notion.
///
/// # Example
///
/// ```rust
/// use notion_cli::auth::validate_token;
///
/// assert!(validate_token("secret_0123456789abcdef"));
/// assert!(!validate_token(""));
/// assert!(!validate_token("has space"));
/// assert!(!validate_token("trailing\n"));
/// ```
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// Masks a token for display, keeping only its first four characters.
///
/// # Example
///
/// ```rust
/// use notion_cli::auth::mask_token;
///
/// assert_eq!(mask_token("secret_abcdef"), "secr********");
/// assert_eq!(mask_token("abc"), "****");
/// ```
pub fn mask_token(token: &str) -> String {
    const VISIBLE: usize = 4;

    let count = token.chars().count();
    if count <= VISIBLE {
        return "****".to_string();
    }

    let prefix: String = token.chars().take(VISIBLE).collect();
    let hidden = (count - VISIBLE).min(8);
    format!("{}{}", prefix, "*".repeat(hidden))
}
