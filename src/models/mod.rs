pub mod cart;
pub mod nutrition;
pub mod raw;
pub mod recipe;

pub use cart::*;
pub use nutrition::*;
pub use raw::*;
pub use recipe::*;

use rand::prelude::*;

/// A fresh identifier: current time in milliseconds followed by nine random
/// base-36 characters.
pub(crate) fn new_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = thread_rng();
    let suffix: String = (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}{}", jiff::Timestamp::now().as_millisecond(), suffix)
}
