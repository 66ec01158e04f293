#![allow(dead_code)]

use std::sync::Mutex;

use lametric::cloud::{CloudError, TokenPair, TokenStore};

#[derive(Default)]
pub struct InMemoryTokenStore {
    tokens: Mutex<Option<TokenPair>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, tokens: TokenPair) {
        *self.tokens.lock().expect("store lock poisoned") = Some(tokens);
    }

    pub fn get(&self) -> Option<TokenPair> {
        self.tokens.lock().expect("store lock poisoned").clone()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Result<Option<TokenPair>, CloudError> {
        Ok(self.get())
    }

    fn save(&self, tokens: &TokenPair) -> Result<(), CloudError> {
        *self.tokens.lock().expect("store lock poisoned") = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), CloudError> {
        *self.tokens.lock().expect("store lock poisoned") = None;
        Ok(())
    }
}

pub fn token_pair(access: &str, refresh: &str) -> TokenPair {
    TokenPair::new(access, refresh)
}
