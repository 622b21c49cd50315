//! Random quote generator.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaChaRng;

pub const QUOTES: [&str; 10] = [
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Innovation distinguishes between a leader and a follower. - Steve Jobs",
    "Life is what happens to you while you're busy making other plans. - John Lennon",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "It is during our darkest moments that we must focus to see the light. - Aristotle",
    "Success is not final, failure is not fatal: it is the courage to continue that counts. - Winston Churchill",
    "The way to get started is to quit talking and begin doing. - Walt Disney",
    "Don't let yesterday take up too much of today. - Will Rogers",
    "You learn more from failure than from success. - Unknown",
    "If you are working on something exciting that you really care about, you don't have to be pushed. The vision pulls you. - Steve Jobs",
];

/// Picks quotes uniformly at random; repeats are allowed.
#[derive(Debug)]
pub struct QuoteBox {
    rng: ChaChaRng,
    current: String,
}

impl QuoteBox {
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaChaRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaChaRng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaChaRng) -> Self {
        let mut quotes = Self {
            rng,
            current: String::new(),
        };
        quotes.next_quote();
        quotes
    }

    /// Draw a new quote, wrapped in double quotes.
    pub fn next_quote(&mut self) -> &str {
        let quote = QUOTES.choose(&mut self.rng).copied().unwrap_or_default();
        self.current = format!("\"{quote}\"");
        &self.current
    }

    pub fn current(&self) -> &str {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_are_wrapped_and_from_the_list() {
        let mut quotes = QuoteBox::seeded(7);
        for _ in 0..20 {
            let quote = quotes.next_quote().to_string();
            let inner = quote.strip_prefix('"').and_then(|q| q.strip_suffix('"')).unwrap();
            assert!(QUOTES.contains(&inner));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = QuoteBox::seeded(42);
        let mut b = QuoteBox::seeded(42);
        assert_eq!(a.current(), b.current());
        for _ in 0..5 {
            assert_eq!(a.next_quote().to_string(), b.next_quote());
        }
    }
}
