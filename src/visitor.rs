// src/visitor.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Cookie carrying the anonymous visitor token.
pub const VISITOR_COOKIE: &str = "clinic_client";

const TOKEN_BYTES: usize = 32;
const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// An anonymous browser identity. Only the hash ever reaches the database.
#[derive(Debug, Clone)]
pub struct Visitor {
    token: String,
    /// True when the token was minted for this request and must be sent back.
    pub is_new: bool,
}

impl Visitor {
    /// Reads the visitor cookie from a `Cookie` header, or mints a new token.
    pub fn from_cookie_header(header: Option<&str>) -> Self {
        match header.and_then(|h| cookie_value(h, VISITOR_COOKIE)) {
            Some(token) if is_token_shaped(token) => Self {
                token: token.to_string(),
                is_new: false,
            },
            _ => Self {
                token: generate_token(&mut OsRng),
                is_new: true,
            },
        }
    }

    pub fn hash(&self) -> [u8; 32] {
        hash_token(&self.token)
    }

    pub fn set_cookie_header(&self) -> String {
        format!(
            "{VISITOR_COOKIE}={}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; HttpOnly; SameSite=Lax",
            self.token
        )
    }
}

/// URL-safe base64 without padding.
pub fn generate_token<R: RngCore>(rng: &mut R) -> String {
    let mut buf = [0u8; TOKEN_BYTES];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

pub fn hash_token(token: &str) -> [u8; 32] {
    let out = Sha256::digest(token.as_bytes());
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}

fn is_token_shaped(token: &str) -> bool {
    !token.is_empty()
        && token.len() <= 128
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// `a=1; b=2` style lookup.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name).then_some(v)
    })
}
