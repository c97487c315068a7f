use rand::Rng;

pub const DEFAULT_KEY_PREFIX: &str = "s_";
pub const DEFAULT_KEY_LENGTH: usize = 4;

const KEY_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of fresh symbolic keys for newly seen strings.
pub trait KeyGenerator {
    fn generate(&mut self) -> String;
}

/// Generates keys like `s_7QX2`: a prefix followed by random uppercase
/// letters and digits.
///
/// The generator does not check for collisions; callers that need unique
/// keys must check against what they already hold.
#[derive(Debug, Clone)]
pub struct RandomKeyGenerator<R> {
    rng: R,
    prefix: String,
    length: usize,
}

impl<R: Rng> RandomKeyGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self::with_shape(rng, DEFAULT_KEY_PREFIX, DEFAULT_KEY_LENGTH)
    }

    pub fn with_shape(rng: R, prefix: impl Into<String>, length: usize) -> Self {
        Self {
            rng,
            prefix: prefix.into(),
            length,
        }
    }
}

impl<R: Rng> KeyGenerator for RandomKeyGenerator<R> {
    fn generate(&mut self) -> String {
        let mut key = String::with_capacity(self.prefix.len() + self.length);
        key.push_str(&self.prefix);
        for _ in 0..self.length {
            let i = self.rng.random_range(0..KEY_CHARSET.len());
            key.push(char::from(KEY_CHARSET[i]));
        }
        key
    }
}
